//! Search request/response types and the provider trait.
//!
//! These mirror the Unsplash `/search/photos` wire schema. Only the
//! `regular` resolution URL is consumed downstream; the other entries
//! are tolerated so schema additions on the provider side never break
//! deserialization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::UnsplashError;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Photo orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

/// Parameters for a `/search/photos` call.
///
/// Serializes directly into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub orientation: Orientation,
    pub page: u32,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPhotosPage {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<RemotePhoto>,
}

/// A raw photo record as returned by Unsplash.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePhoto {
    /// Provider-assigned stable identifier.
    pub id: String,
    /// Original pixel width.
    pub width: u32,
    /// Original pixel height.
    pub height: u32,
    /// Optional description; often null.
    pub alt_description: Option<String>,
    /// Image URLs keyed by resolution.
    pub urls: PhotoUrls,
}

/// Image URLs by resolution. `regular` is the display resolution the
/// proxy serves; the rest are optional on our side.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// A keyword photo-search provider.
///
/// Implemented by [`crate::UnsplashApi`] for the real service and by
/// stubs in tests. Handlers depend on this trait, never on the concrete
/// client.
#[async_trait]
pub trait PhotoSearch: Send + Sync {
    /// Run a keyword search and return one page of raw results.
    async fn search_photos(&self, request: &SearchRequest)
        -> Result<SearchPhotosPage, UnsplashError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
