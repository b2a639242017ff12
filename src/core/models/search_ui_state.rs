#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchUiState {
    #[default]
    Initial,
    Loading,
    Error(String),
    Success(Vec<String>),
}

impl SearchUiState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchUiState::Error(_) | SearchUiState::Success(_))
    }
}
