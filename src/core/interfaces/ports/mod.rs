mod search_image_use_case;
mod search_state_renderer;

pub use search_image_use_case::SearchImageUseCase;
pub use search_state_renderer::SearchStateRenderer;
