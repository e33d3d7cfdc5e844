//! Route definitions for the photo-search proxy.
//!
//! Merged into the `/api` route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// Photo routes (`/photos` under the API prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/photos", get(photos::search_photos))
}
