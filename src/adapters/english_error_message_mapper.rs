use crate::core::interfaces::adapters::ErrorMessageMapper;
use crate::core::models::SearchError;
use crate::global_constants::{MESSAGE_NO_CONNECTION, MESSAGE_SERVER_ERROR, MESSAGE_UNKNOWN_ERROR};

pub struct EnglishErrorMessageMapper;

impl ErrorMessageMapper for EnglishErrorMessageMapper {
    fn map_error_message(&self, error: SearchError) -> String {
        match error {
            SearchError::NoConnection => MESSAGE_NO_CONNECTION.to_string(),
            SearchError::ServerError => MESSAGE_SERVER_ERROR.to_string(),
            SearchError::Unknown => MESSAGE_UNKNOWN_ERROR.to_string(),
        }
    }
}
