use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use aperture_unsplash::UnsplashError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent `{"error": ...}`
/// JSON responses. Provider detail is logged, never echoed to clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The Unsplash access key is not configured.
    #[error("Missing UNSPLASH_ACCESS_KEY environment variable")]
    MissingAccessKey,

    /// A failure from the Unsplash provider layer.
    #[error(transparent)]
    Provider(#[from] UnsplashError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingAccessKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing UNSPLASH_ACCESS_KEY environment variable",
            ),

            // The provider reported a failure (rate limit, invalid
            // query, bad credentials). Surfaced as a generic upstream
            // error; the status and body go to the log only.
            AppError::Provider(UnsplashError::Api { status, body }) => {
                tracing::warn!(upstream_status = status, body = %body, "Unsplash reported an error");
                (StatusCode::BAD_GATEWAY, "Unsplash error")
            }

            // Anything else that went wrong during the call: network
            // failure, timeout, malformed response.
            AppError::Provider(UnsplashError::Transport(detail)) => {
                tracing::error!(error = %detail, "Photo fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch photos")
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
