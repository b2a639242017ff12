use std::fmt;

use super::Image;

/// Closed set of failure categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchError {
    NoConnection,
    ServerError,
    Unknown,
}

impl SearchError {
    pub const ALL: [SearchError; 3] = [
        SearchError::NoConnection,
        SearchError::ServerError,
        SearchError::Unknown,
    ];
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoConnection => write!(f, "NoConnection"),
            SearchError::ServerError => write!(f, "ServerError"),
            SearchError::Unknown => write!(f, "Unknown"),
        }
    }
}

pub type SearchOutcome = Result<Vec<Image>, SearchError>;
