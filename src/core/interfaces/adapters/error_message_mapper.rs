use crate::core::models::SearchError;

pub trait ErrorMessageMapper: Send + Sync {
    fn map_error_message(&self, error: SearchError) -> String;
}
