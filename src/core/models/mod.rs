mod image;
mod search_error;
mod search_ui_state;
mod user_settings;

pub use image::Image;
pub use search_error::{SearchError, SearchOutcome};
pub use search_ui_state::SearchUiState;
pub use user_settings::UserSettings;
