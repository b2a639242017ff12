use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::Image;

#[derive(Debug, Error)]
pub enum ImageSearchClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// Performs one search round trip against the remote photo API.
///
/// Connectivity failures map to `Connection`, HTTP error statuses to `Server`.
/// Anything else is passed through as `Unexpected`.
#[async_trait]
pub trait ImageSearchClient: Send + Sync {
    async fn search_images(&self, query: &str) -> Result<Vec<Image>, ImageSearchClientError>;
}
