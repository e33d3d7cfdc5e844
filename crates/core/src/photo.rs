//! The normalized photo record returned to gallery clients.
//!
//! Decoupled from the Unsplash wire schema: the proxy maps raw provider
//! records into this shape and clients never see anything else.

// ---------------------------------------------------------------------------
// Fetch constants
// ---------------------------------------------------------------------------

/// Number of photos requested from the provider per category. The proxy
/// serves exactly one page; there is no pagination.
pub const SEARCH_PAGE_SIZE: u32 = 24;

/// How long (seconds) intermediate caches may serve a photo response
/// before revalidating. Surfaced as a `Cache-Control` hint; the proxy
/// itself does not cache.
pub const CACHE_MAX_AGE_SECS: u64 = 3600;

// ---------------------------------------------------------------------------
// Photo DTO
// ---------------------------------------------------------------------------

/// A single photo as served to gallery clients.
///
/// `width` and `height` are the original pixel dimensions; clients use
/// them to preserve the aspect ratio of thumbnails. `alt` serializes as
/// JSON `null` when the provider has no description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Photo {
    /// Provider-assigned stable identifier.
    pub id: String,
    /// Display-resolution image URL.
    pub src: String,
    pub width: u32,
    pub height: u32,
    /// Optional textual description for accessibility.
    pub alt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(alt: Option<&str>) -> Photo {
        Photo {
            id: "abc123".into(),
            src: "https://images.example/regular.jpg".into(),
            width: 1080,
            height: 1620,
            alt: alt.map(String::from),
        }
    }

    #[test]
    fn alt_serializes_as_null_when_absent() {
        let json = serde_json::to_value(sample(None)).unwrap();
        assert!(json.get("alt").unwrap().is_null());
    }

    #[test]
    fn alt_serializes_as_string_when_present() {
        let json = serde_json::to_value(sample(Some("waves at dusk"))).unwrap();
        assert_eq!(json["alt"], "waves at dusk");
    }

    #[test]
    fn round_trips_through_json() {
        let photo = sample(Some("portrait"));
        let json = serde_json::to_string(&photo).unwrap();
        let back: Photo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, photo);
    }
}
