mod english_error_message_mapper;
mod pexels_image_search_client;

pub use english_error_message_mapper::EnglishErrorMessageMapper;
pub use pexels_image_search_client::PexelsImageSearchClient;
