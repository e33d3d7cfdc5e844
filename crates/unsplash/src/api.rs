//! REST API client for the Unsplash HTTP endpoints.
//!
//! Wraps the Unsplash search API using [`reqwest`]. Authentication uses
//! the public-access `Client-ID` scheme; the access key is supplied at
//! construction and never read from ambient process state.

use async_trait::async_trait;

use crate::search::{PhotoSearch, SearchPhotosPage, SearchRequest};

/// Production Unsplash API root.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// HTTP client for the Unsplash API.
pub struct UnsplashApi {
    client: reqwest::Client,
    api_url: String,
    access_key: String,
}

/// Errors from the Unsplash REST layer.
#[derive(Debug, thiserror::Error)]
pub enum UnsplashError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unsplash returned a non-2xx status code (rate limit, invalid
    /// query, auth failure, ...).
    #[error("Unsplash API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl UnsplashApi {
    /// Create a client for the production API.
    pub fn new(access_key: String) -> Self {
        Self::with_api_url(access_key, DEFAULT_API_URL.to_string())
    }

    /// Create a client against a specific API root (used to point tests
    /// at a local stand-in server).
    pub fn with_api_url(access_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            access_key,
        }
    }

    /// Base API URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl PhotoSearch for UnsplashApi {
    /// Run `GET /search/photos` with the given parameters.
    async fn search_photos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchPhotosPage, UnsplashError> {
        tracing::debug!(query = %request.query, per_page = request.per_page, "Unsplash search request");

        let response = self
            .client
            .get(format!("{}/search/photos", self.api_url))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(request)
            .send()
            .await
            .map_err(|e| UnsplashError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UnsplashError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SearchPhotosPage>()
            .await
            .map_err(|e| UnsplashError::Transport(e.to_string()))
    }
}
