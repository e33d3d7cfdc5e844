use std::sync::Arc;

use aperture_unsplash::PhotoSearch;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). There is no
/// mutable state here: every request computes independently, so the
/// server needs no locking to serve requests concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Injected photo-search provider. `None` when no access key is
    /// configured, in which case the photo proxy rejects each request.
    pub provider: Option<Arc<dyn PhotoSearch>>,
}
