mod error_message_mapper;
mod image_search_client;

pub use error_message_mapper::ErrorMessageMapper;
pub use image_search_client::{ImageSearchClient, ImageSearchClientError};
