use crate::core::models::SearchUiState;

pub trait SearchStateRenderer: Send {
    fn render_state(&mut self, state: &SearchUiState) -> anyhow::Result<()>;
}
