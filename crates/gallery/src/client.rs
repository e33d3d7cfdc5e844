//! HTTP client for the photo proxy endpoint.
//!
//! [`ProxyClient`] wraps `GET /api/photos` using [`reqwest`]. The
//! [`PhotoFetcher`] trait lets the portfolio take the fetch operation as
//! an injected dependency, so tests can stand in for the network.

use async_trait::async_trait;

use aperture_core::{Category, Photo};

/// Errors from the proxy fetch layer.
///
/// A response body without a usable `photos` field is NOT an error --
/// it yields the empty list, matching what the page displays when the
/// proxy reports a failure.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network, DNS, non-JSON body).
    #[error("Transport error: {0}")]
    Transport(String),
}

/// A cancellable source of photo lists keyed by category.
///
/// Implemented by [`ProxyClient`] for the real endpoint and by stubs in
/// tests. Cancellation is handled by the caller dropping the future.
#[async_trait]
pub trait PhotoFetcher: Send + Sync {
    /// Fetch the photo list for one category.
    async fn fetch_photos(&self, category: Category) -> Result<Vec<Photo>, FetchError>;
}

/// HTTP client for the photo proxy.
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// Create a client for a proxy instance.
    ///
    /// * `base_url` - Service root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Service root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PhotoFetcher for ProxyClient {
    /// Run `GET {base}/api/photos?category=...`.
    ///
    /// Any JSON body is accepted regardless of status code; the `photos`
    /// field is extracted with a fallback to the empty list, so proxy
    /// error payloads (`{"error": ...}`) display as an empty gallery.
    async fn fetch_photos(&self, category: Category) -> Result<Vec<Photo>, FetchError> {
        let response = self
            .client
            .get(format!("{}/api/photos", self.base_url))
            .query(&[("category", category.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(photos_field(body))
    }
}

/// Extract the `photos` array, treating an absent or malformed field as
/// empty.
fn photos_field(mut body: serde_json::Value) -> Vec<Photo> {
    body.get_mut("photos")
        .map(serde_json::Value::take)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_photos_from_a_well_formed_payload() {
        let body = json!({
            "photos": [{
                "id": "a",
                "src": "https://images.example/a.jpg",
                "width": 1080,
                "height": 1620,
                "alt": null
            }]
        });

        let photos = photos_field(body);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, "a");
        assert_eq!(photos[0].alt, None);
    }

    #[test]
    fn absent_photos_field_yields_empty_list() {
        assert!(photos_field(json!({ "error": "Unsplash error" })).is_empty());
    }

    #[test]
    fn malformed_photos_field_yields_empty_list() {
        assert!(photos_field(json!({ "photos": "not-a-list" })).is_empty());
        assert!(photos_field(json!({ "photos": [{ "id": 42 }] })).is_empty());
    }
}
