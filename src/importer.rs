//! Type definitions for the Pinboard JSON export format.
//!
//! An export is a single JSON array of bookmark objects:
//!
//! ```json
//! [
//!   {
//!     "href": "https://example.com/",
//!     "description": "Example",
//!     "extended": "Longer note about the page.",
//!     "meta": "92959a96fd69146c5fe7cbde6e5720f2",
//!     "hash": "8c15f498bbeda20e0d0bdbd56a5f7f3a",
//!     "time": "2025-06-26T10:10:02Z",
//!     "shared": "yes",
//!     "toread": "no",
//!     "tags": "rust cli cy-bookmark"
//!   }
//! ]
//! ```
//!
//! Only the fields the importer consumes are modeled; serde ignores the rest.
//! Every field is optional in practice, so each gets a default.

use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One bookmark record from the export.
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmark {
    /// The bookmarked URL.
    #[serde(default)]
    pub href: String,
    /// Pinboard's "description" is the bookmark title.
    #[serde(default = "default_description")]
    pub description: String,
    /// Free-text note, becomes the content body.
    #[serde(default)]
    pub extended: String,
    /// Kept as a raw string so a malformed timestamp degrades per record
    /// instead of failing the whole deserialization.
    #[serde(default)]
    pub time: String,
    /// Space-separated tag tokens.
    #[serde(default)]
    pub tags: String,
}

fn default_description() -> String {
    "No Description".to_string()
}

impl Bookmark {
    /// The record's tags, split on whitespace, empty tokens dropped,
    /// order preserved.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.split_whitespace().map(str::to_string).collect()
    }

    /// Exact, case-sensitive token match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.split_whitespace().any(|t| t == tag)
    }
}

/// Read and deserialize a full export file.
pub fn load_bookmarks(path: &Path) -> Result<Vec<Bookmark>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Failed to parse JSON export: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_get_defaults() {
        let bookmark: Bookmark = serde_json::from_str(r#"{"href": "https://x.example/"}"#).unwrap();
        assert_eq!(bookmark.href, "https://x.example/");
        assert_eq!(bookmark.description, "No Description");
        assert_eq!(bookmark.extended, "");
        assert_eq!(bookmark.time, "");
        assert_eq!(bookmark.tags, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let bookmark: Bookmark = serde_json::from_str(
            r#"{"href": "https://x.example/", "shared": "yes", "toread": "no", "hash": "abc"}"#,
        )
        .unwrap();
        assert_eq!(bookmark.href, "https://x.example/");
    }

    #[test]
    fn tag_list_splits_on_whitespace() {
        let bookmark: Bookmark =
            serde_json::from_str(r#"{"tags": "  rust   cli cy-bookmark "}"#).unwrap();
        assert_eq!(bookmark.tag_list(), vec!["rust", "cli", "cy-bookmark"]);
    }

    #[test]
    fn has_tag_is_case_sensitive() {
        let bookmark: Bookmark = serde_json::from_str(r#"{"tags": "Rust cli"}"#).unwrap();
        assert!(bookmark.has_tag("Rust"));
        assert!(bookmark.has_tag("cli"));
        assert!(!bookmark.has_tag("rust"));
        assert!(!bookmark.has_tag("c"));
    }
}
