pub mod health;
pub mod photos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /photos    GET  -> photo search proxy
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(photos::router())
}
