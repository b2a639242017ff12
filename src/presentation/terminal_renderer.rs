use std::io::Write;

use crate::core::interfaces::ports::SearchStateRenderer;
use crate::core::models::SearchUiState;
use crate::global_constants::{
    MIN_QUERY_LENGTH, USER_MESSAGE_LOADING, USER_MESSAGE_NO_RESULTS,
    USER_MESSAGE_WELCOME_DESCRIPTION, USER_MESSAGE_WELCOME_TITLE,
};

pub struct TerminalRenderer<W: Write + Send> {
    output: W,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.output
    }
}

pub fn initial_helper_text(min_query_length: usize) -> String {
    USER_MESSAGE_WELCOME_DESCRIPTION.replace("{}", &min_query_length.to_string())
}

impl<W: Write + Send> SearchStateRenderer for TerminalRenderer<W> {
    fn render_state(&mut self, state: &SearchUiState) -> anyhow::Result<()> {
        match state {
            SearchUiState::Initial => {
                writeln!(self.output, "{}", USER_MESSAGE_WELCOME_TITLE)?;
                writeln!(self.output, "{}", initial_helper_text(MIN_QUERY_LENGTH))?;
            }
            SearchUiState::Loading => {
                writeln!(self.output, "{}", USER_MESSAGE_LOADING)?;
            }
            SearchUiState::Error(message) => {
                writeln!(self.output, "[ERROR] {}", message)?;
            }
            SearchUiState::Success(images) if images.is_empty() => {
                writeln!(self.output, "{}", USER_MESSAGE_NO_RESULTS)?;
            }
            SearchUiState::Success(images) => {
                for (index, url) in images.iter().enumerate() {
                    writeln!(self.output, "{:>3}. {}", index + 1, url)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: SearchUiState) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_state(&state).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_initial_state_mentions_min_query_length() {
        let output = render(SearchUiState::Initial);

        assert!(output.contains(USER_MESSAGE_WELCOME_TITLE));
        assert!(output.contains("at least 3 characters"));
    }

    #[test]
    fn test_loading_state() {
        assert_eq!(render(SearchUiState::Loading), "Searching...\n");
    }

    #[test]
    fn test_error_state_shows_message() {
        let output = render(SearchUiState::Error("No internet connection".to_string()));

        assert_eq!(output, "[ERROR] No internet connection\n");
    }

    #[test]
    fn test_success_state_lists_urls_in_order() {
        let output = render(SearchUiState::Success(vec![
            "url1".to_string(),
            "url2".to_string(),
        ]));

        assert_eq!(output, "  1. url1\n  2. url2\n");
    }

    #[test]
    fn test_empty_success_state() {
        assert_eq!(render(SearchUiState::Success(vec![])), "No images found\n");
    }
}
