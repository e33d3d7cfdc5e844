//! Fetch-lifecycle state machine for the portfolio page.
//!
//! [`Portfolio`] owns the active category and the displayed photo list.
//! Selecting a category cancels any in-flight fetch and issues exactly
//! one new request; only the most recently issued request may commit its
//! result. Fetch failures are swallowed -- the previous list stays on
//! screen, and cancellation is never treated as a failure.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use aperture_core::{masonry, Category, Photo};

use crate::client::PhotoFetcher;

/// Portfolio page state: active category plus displayed photos.
///
/// Cheap to share; all methods take `&self`. Must be used from within a
/// Tokio runtime (fetches run as spawned tasks).
pub struct Portfolio {
    fetcher: Arc<dyn PhotoFetcher>,
    shared: Arc<Shared>,
}

struct Shared {
    photos_tx: watch::Sender<Vec<Photo>>,
    lifecycle: Mutex<Lifecycle>,
}

/// Mutable selection state, guarded by one lock so that supersede and
/// commit decisions are atomic.
struct Lifecycle {
    active: Category,
    /// Bumped on every `select` and on `close`. A fetch task may commit
    /// only while its own generation is still current.
    generation: u64,
    /// Cancellation handle for the in-flight request, if any.
    in_flight: Option<CancellationToken>,
}

impl Portfolio {
    /// Create a portfolio with an empty photo list and `all` active.
    ///
    /// No fetch is issued until the first [`select`](Self::select) call
    /// (the page does one on mount).
    pub fn new(fetcher: Arc<dyn PhotoFetcher>) -> Self {
        let (photos_tx, _) = watch::channel(Vec::new());

        Self {
            fetcher,
            shared: Arc::new(Shared {
                photos_tx,
                lifecycle: Mutex::new(Lifecycle {
                    active: Category::All,
                    generation: 0,
                    in_flight: None,
                }),
            }),
        }
    }

    /// Currently active category.
    pub fn active(&self) -> Category {
        self.shared.lifecycle.lock().unwrap().active
    }

    /// Snapshot of the displayed photo list.
    pub fn photos(&self) -> Vec<Photo> {
        self.shared.photos_tx.borrow().clone()
    }

    /// Subscribe to changes of the displayed photo list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Photo>> {
        self.shared.photos_tx.subscribe()
    }

    /// Masonry view of the displayed photos for a viewport width.
    pub fn masonry(&self, viewport_width: u32) -> Vec<Vec<Photo>> {
        let photos = self.shared.photos_tx.borrow();
        masonry::distribute(&photos, masonry::column_count(viewport_width))
    }

    /// Select a category and fetch its photos.
    ///
    /// Cancels any request still in flight, then issues exactly one new
    /// request. The displayed list is untouched until the new request
    /// resolves successfully.
    pub fn select(&self, category: Category) {
        let (token, generation) = {
            let mut lifecycle = self.shared.lifecycle.lock().unwrap();

            if let Some(previous) = lifecycle.in_flight.take() {
                previous.cancel();
            }

            lifecycle.active = category;
            lifecycle.generation += 1;

            let token = CancellationToken::new();
            lifecycle.in_flight = Some(token.clone());
            (token, lifecycle.generation)
        };

        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.shared);

        tokio::spawn(async move {
            let result = tokio::select! {
                () = token.cancelled() => return,
                result = fetcher.fetch_photos(category) => result,
            };

            match result {
                Ok(photos) => shared.commit(generation, photos),
                Err(err) => {
                    tracing::debug!(category = %category, error = %err, "Photo fetch failed; keeping previous list");
                }
            }
        });
    }

    /// Tear down the page: cancel any in-flight request.
    ///
    /// Pending results are never committed afterward. Idempotent.
    pub fn close(&self) {
        let mut lifecycle = self.shared.lifecycle.lock().unwrap();

        if let Some(token) = lifecycle.in_flight.take() {
            token.cancel();
        }
        lifecycle.generation += 1;
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.close();
    }
}

impl Shared {
    /// Commit a resolved fetch, unless a newer selection superseded it.
    fn commit(&self, generation: u64, photos: Vec<Photo>) {
        let mut lifecycle = self.lifecycle.lock().unwrap();

        if lifecycle.generation != generation {
            return;
        }

        lifecycle.in_flight = None;
        self.photos_tx.send_replace(photos);
    }
}
