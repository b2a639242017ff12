use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::core::interfaces::adapters::{ImageSearchClient, ImageSearchClientError};
use crate::core::models::Image;
use crate::global_constants::{
    AUTHORIZATION_HEADER, LOG_TAG_SEARCH_CLIENT, SEARCH_ORIENTATION, SEARCH_PATH, SEARCH_SIZE,
};

pub struct PexelsImageSearchClient {
    client: Client,
    api_base_url: String,
    api_key: String,
}

impl PexelsImageSearchClient {
    pub fn build(
        api_base_url: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self::with_client(client, api_base_url, api_key))
    }

    pub fn with_client(
        client: Client,
        api_base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let mut api_base_url = api_base_url.into();
        if !api_base_url.ends_with('/') {
            api_base_url.push('/');
        }

        Self {
            client,
            api_base_url,
            api_key: api_key.into(),
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}{}?query={}&orientation={}&size={}",
            self.api_base_url,
            SEARCH_PATH,
            urlencoding::encode(query),
            SEARCH_ORIENTATION,
            SEARCH_SIZE
        )
    }
}

#[async_trait]
impl ImageSearchClient for PexelsImageSearchClient {
    async fn search_images(&self, query: &str) -> Result<Vec<Image>, ImageSearchClientError> {
        let search_url = self.construct_search_url(query);
        log::info!("{} GET {}", LOG_TAG_SEARCH_CLIENT, search_url);

        let response = self
            .client
            .get(&search_url)
            .header(AUTHORIZATION_HEADER, &self.api_key)
            .send()
            .await
            .map_err(classify_transport_error)?;

        log::debug!("{} Response status: {}", LOG_TAG_SEARCH_CLIENT, response.status());

        let response = response
            .error_for_status()
            .map_err(classify_transport_error)?;
        // Body decoding is left to serde, so a failing read here is always IO.
        let body = response.text().await.map_err(|error| {
            log::warn!("{} Failed to read response body: {}", LOG_TAG_SEARCH_CLIENT, error);
            ImageSearchClientError::Connection(error.to_string())
        })?;

        log::debug!("{} Response body: {}", LOG_TAG_SEARCH_CLIENT, body);

        let images = parse_images_response(&body)?;
        log::info!(
            "{} Received {} images for {:?}",
            LOG_TAG_SEARCH_CLIENT,
            images.len(),
            query
        );

        Ok(images)
    }
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    photos: Option<Vec<Photo>>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSource,
}

#[derive(Debug, Deserialize)]
struct PhotoSource {
    original: String,
}

fn parse_images_response(body: &str) -> Result<Vec<Image>, ImageSearchClientError> {
    let response: ImagesResponse = serde_json::from_str(body)
        .map_err(|error| anyhow::anyhow!("Malformed search response: {}", error))?;

    Ok(response
        .photos
        .unwrap_or_default()
        .into_iter()
        .map(|photo| Image::new(photo.src.original))
        .collect())
}

fn classify_transport_error(error: reqwest::Error) -> ImageSearchClientError {
    if error.is_status() {
        let status = error.status().map(|status| status.as_u16()).unwrap_or_default();
        log::warn!("{} Server responded with {}", LOG_TAG_SEARCH_CLIENT, status);
        return ImageSearchClientError::Server { status };
    }

    if error.is_connect() || error.is_timeout() || error.is_request() || error.is_body() {
        log::warn!("{} Connection failure: {}", LOG_TAG_SEARCH_CLIENT, error);
        return ImageSearchClientError::Connection(error.to_string());
    }

    ImageSearchClientError::Unexpected(anyhow::Error::new(error))
}
