use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::core::interfaces::adapters::{ImageSearchClient, ImageSearchClientError};
use crate::core::interfaces::ports::SearchImageUseCase;
use crate::core::models::{SearchError, SearchOutcome};
use crate::global_constants::LOG_TAG_USE_CASE;

/// Turns the client's failure contract into a [`SearchOutcome`].
///
/// Every failure, including a panic inside the client future, ends up as one
/// of the three [`SearchError`] categories.
pub struct SearchImagesInteractor {
    image_search_client: Arc<dyn ImageSearchClient>,
}

impl SearchImagesInteractor {
    pub fn new(image_search_client: Arc<dyn ImageSearchClient>) -> Self {
        Self {
            image_search_client,
        }
    }
}

#[async_trait]
impl SearchImageUseCase for SearchImagesInteractor {
    async fn search(&self, query: &str) -> SearchOutcome {
        let search = self.image_search_client.search_images(query);

        match AssertUnwindSafe(search).catch_unwind().await {
            Ok(Ok(images)) => {
                log::debug!("{} {} images for {:?}", LOG_TAG_USE_CASE, images.len(), query);
                Ok(images)
            }
            Ok(Err(error)) => {
                log::warn!("{} Search for {:?} failed: {}", LOG_TAG_USE_CASE, query, error);
                Err(classify_client_error(&error))
            }
            Err(_) => {
                log::error!("{} Search for {:?} panicked", LOG_TAG_USE_CASE, query);
                Err(SearchError::Unknown)
            }
        }
    }
}

fn classify_client_error(error: &ImageSearchClientError) -> SearchError {
    match error {
        ImageSearchClientError::Connection(_) => SearchError::NoConnection,
        ImageSearchClientError::Server { .. } => SearchError::ServerError,
        ImageSearchClientError::Unexpected(_) => SearchError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Image;
    use std::sync::Mutex;

    enum MockBehavior {
        Images(Vec<Image>),
        ConnectionFailure,
        ServerFailure(u16),
        UnexpectedFailure,
        Panic,
    }

    struct MockImageSearchClient {
        behavior: MockBehavior,
        received_queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockImageSearchClient {
        fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                received_queries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl ImageSearchClient for MockImageSearchClient {
        async fn search_images(&self, query: &str) -> Result<Vec<Image>, ImageSearchClientError> {
            self.received_queries.lock().unwrap().push(query.to_string());
            match &self.behavior {
                MockBehavior::Images(images) => Ok(images.clone()),
                MockBehavior::ConnectionFailure => Err(ImageSearchClientError::Connection(
                    "connection refused".to_string(),
                )),
                MockBehavior::ServerFailure(status) => {
                    Err(ImageSearchClientError::Server { status: *status })
                }
                MockBehavior::UnexpectedFailure => Err(ImageSearchClientError::Unexpected(
                    anyhow::anyhow!("unexpected response shape"),
                )),
                MockBehavior::Panic => panic!("client blew up"),
            }
        }
    }

    fn create_use_case(behavior: MockBehavior) -> (SearchImagesInteractor, Arc<Mutex<Vec<String>>>) {
        let client = MockImageSearchClient::new(behavior);
        let received_queries = Arc::clone(&client.received_queries);
        (SearchImagesInteractor::new(Arc::new(client)), received_queries)
    }

    #[tokio::test]
    async fn test_search_returns_images_on_success() {
        let images = vec![Image::new("url1"), Image::new("url2")];
        let (use_case, received_queries) = create_use_case(MockBehavior::Images(images.clone()));

        let outcome = use_case.search("cats").await;

        assert_eq!(outcome, Ok(images));
        assert_eq!(*received_queries.lock().unwrap(), vec!["cats".to_string()]);
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_no_connection() {
        let (use_case, _) = create_use_case(MockBehavior::ConnectionFailure);

        let outcome = use_case.search("dogs").await;

        assert_eq!(outcome, Err(SearchError::NoConnection));
    }

    #[tokio::test]
    async fn test_server_failure_maps_to_server_error() {
        let (use_case, _) = create_use_case(MockBehavior::ServerFailure(503));

        let outcome = use_case.search("birds").await;

        assert_eq!(outcome, Err(SearchError::ServerError));
    }

    #[tokio::test]
    async fn test_unexpected_failure_maps_to_unknown() {
        let (use_case, _) = create_use_case(MockBehavior::UnexpectedFailure);

        let outcome = use_case.search("landscape").await;

        assert_eq!(outcome, Err(SearchError::Unknown));
    }

    #[tokio::test]
    async fn test_panicking_client_maps_to_unknown() {
        let (use_case, _) = create_use_case(MockBehavior::Panic);

        let outcome = use_case.search("mountains").await;

        assert_eq!(outcome, Err(SearchError::Unknown));
    }
}
