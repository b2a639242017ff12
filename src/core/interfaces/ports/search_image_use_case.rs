use async_trait::async_trait;

use crate::core::models::SearchOutcome;

#[async_trait]
pub trait SearchImageUseCase: Send + Sync {
    async fn search(&self, query: &str) -> SearchOutcome;
}
