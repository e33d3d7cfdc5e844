//! Portfolio categories and their provider search queries.
//!
//! A category is a user-facing filter key. Each one maps 1:1 to a fixed
//! Unsplash search query; anything the client sends that we do not
//! recognize falls back to [`Category::All`], so resolution never fails.

use std::fmt;

/// A user-facing portfolio filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Oceans,
    Forests,
    People,
}

/// All categories in the order they are presented to users.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::All,
    Category::Oceans,
    Category::Forests,
    Category::People,
];

impl Category {
    /// Resolve an optional, case-insensitive request parameter.
    ///
    /// Absent input and unrecognized keys both resolve to [`Category::All`].
    pub fn resolve(param: Option<&str>) -> Self {
        match param {
            Some(raw) => Self::from_key(&raw.to_lowercase()),
            None => Self::All,
        }
    }

    /// Parse an already-lowercased key, falling back to [`Category::All`].
    fn from_key(key: &str) -> Self {
        match key {
            "all" => Self::All,
            "oceans" => Self::Oceans,
            "forests" => Self::Forests,
            "people" => Self::People,
            _ => Self::All,
        }
    }

    /// The wire key for this category (`all`, `oceans`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Oceans => "oceans",
            Self::Forests => "forests",
            Self::People => "people",
        }
    }

    /// Display label used by gallery front-ends.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Oceans => "OCEANS",
            Self::Forests => "FORESTS",
            Self::People => "PEOPLE",
        }
    }

    /// The Unsplash search query for this category. Never empty.
    pub fn query(self) -> &'static str {
        match self {
            Self::All => "nature",
            Self::Oceans => "ocean sea water waves",
            Self::Forests => "forest trees woods nature",
            Self::People => "people portrait street",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- resolve -------------------------------------------------------------

    #[test]
    fn resolve_recognized_keys() {
        assert_eq!(Category::resolve(Some("all")), Category::All);
        assert_eq!(Category::resolve(Some("oceans")), Category::Oceans);
        assert_eq!(Category::resolve(Some("forests")), Category::Forests);
        assert_eq!(Category::resolve(Some("people")), Category::People);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Category::resolve(Some("OCEANS")), Category::Oceans);
        assert_eq!(Category::resolve(Some("Forests")), Category::Forests);
    }

    #[test]
    fn resolve_unknown_key_falls_back_to_all() {
        assert_eq!(Category::resolve(Some("xyz")), Category::All);
        assert_eq!(Category::resolve(Some("")), Category::All);
    }

    #[test]
    fn resolve_absent_falls_back_to_all() {
        assert_eq!(Category::resolve(None), Category::All);
    }

    // -- query ---------------------------------------------------------------

    #[test]
    fn query_mapping_is_exact() {
        assert_eq!(Category::All.query(), "nature");
        assert_eq!(Category::Oceans.query(), "ocean sea water waves");
        assert_eq!(Category::Forests.query(), "forest trees woods nature");
        assert_eq!(Category::People.query(), "people portrait street");
    }

    #[test]
    fn unknown_key_resolves_to_all_query() {
        assert_eq!(Category::resolve(Some("xyz")).query(), "nature");
        assert_eq!(Category::resolve(None).query(), "nature");
    }

    #[test]
    fn queries_are_never_empty() {
        for category in ALL_CATEGORIES {
            assert!(!category.query().is_empty());
        }
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(
            serde_json::to_string(&Category::Oceans).unwrap(),
            "\"oceans\""
        );
    }

    #[test]
    fn deserializes_from_lowercase_key() {
        let category: Category = serde_json::from_str("\"forests\"").unwrap();
        assert_eq!(category, Category::Forests);
    }

    // -- labels --------------------------------------------------------------

    #[test]
    fn labels_match_presentation_order() {
        let labels: Vec<_> = ALL_CATEGORIES.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["ALL", "OCEANS", "FORESTS", "PEOPLE"]);
    }
}
