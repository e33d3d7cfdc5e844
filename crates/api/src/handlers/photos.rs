//! Handler for the photo-search proxy.
//!
//! Resolves the requested category to a provider query, calls the
//! injected search provider for a single fixed-size page, and maps the
//! raw results into the stable [`Photo`] DTO shape.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use aperture_core::photo::{CACHE_MAX_AGE_SECS, SEARCH_PAGE_SIZE};
use aperture_core::{Category, Photo};
use aperture_unsplash::{Orientation, RemotePhoto, SearchRequest};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/photos`.
#[derive(Debug, Deserialize)]
pub struct PhotosQuery {
    /// Category key; unknown or absent values fall back to `all`.
    pub category: Option<String>,
}

/// Response payload for `GET /api/photos`.
#[derive(Debug, Serialize)]
pub struct PhotosResponse {
    pub photos: Vec<Photo>,
}

/// GET /api/photos
///
/// Proxy a category search against the photo provider. Returns one page
/// of normalized photo DTOs, with a revalidation hint for any caching
/// layer in front of the service.
pub async fn search_photos(
    State(state): State<AppState>,
    Query(params): Query<PhotosQuery>,
) -> AppResult<impl IntoResponse> {
    let category = Category::resolve(params.category.as_deref());

    let provider = state.provider.as_ref().ok_or(AppError::MissingAccessKey)?;

    let request = SearchRequest {
        query: category.query().to_string(),
        per_page: SEARCH_PAGE_SIZE,
        orientation: Orientation::Portrait,
        page: 1,
    };

    let page = provider.search_photos(&request).await?;
    let photos: Vec<Photo> = page.results.into_iter().map(into_photo).collect();

    tracing::debug!(category = %category, count = photos.len(), "Photos fetched");

    Ok((
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={CACHE_MAX_AGE_SECS}"),
        )],
        Json(PhotosResponse { photos }),
    ))
}

/// Map a raw provider record to the client-facing DTO.
fn into_photo(remote: RemotePhoto) -> Photo {
    Photo {
        id: remote.id,
        src: remote.urls.regular,
        width: remote.width,
        height: remote.height,
        alt: remote.alt_description,
    }
}
