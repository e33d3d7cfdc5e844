//! Unsplash REST client library.
//!
//! Wraps the Unsplash photo-search HTTP API using [`reqwest`] and
//! exposes the [`search::PhotoSearch`] trait so the API server can take
//! the provider as an injected dependency instead of a process-wide
//! singleton.

pub mod api;
pub mod search;

pub use api::{UnsplashApi, UnsplashError};
pub use search::{Orientation, PhotoSearch, PhotoUrls, RemotePhoto, SearchPhotosPage, SearchRequest};
