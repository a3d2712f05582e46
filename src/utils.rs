use chrono::{NaiveDateTime, Utc};
use std::path::PathBuf;

/// Pinboard timestamps are UTC with a literal `Z` suffix and no fractional
/// seconds, e.g. `2025-06-26T10:10:02Z`.
const PINBOARD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Configuration required to run the import process.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Clone)]
pub struct ImportConfig {
    pub json_file: PathBuf,
    pub output_dir: PathBuf,
    /// `None` disables tag filtering entirely.
    pub required_tag: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
}

#[derive(Clone, Copy)]
pub enum ProcessResult {
    Created,
    Updated,
}

/// The two date renderings Hugo needs from one bookmark timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HugoDate {
    /// Frontmatter `date:` value with an explicit UTC offset,
    /// e.g. `2025-06-26T10:10:02+00:00`.
    pub timestamp: String,
    /// Filename prefix, e.g. `2025-06-26`.
    pub file_prefix: String,
}

impl HugoDate {
    /// Parse a Pinboard `time` string. Returns `None` on any deviation from
    /// the expected format; the caller decides the fallback.
    pub fn parse(time: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(time, PINBOARD_TIME_FORMAT)
            .ok()
            .map(Self::from_naive)
    }

    /// Current UTC wall-clock time, used when a record's timestamp is
    /// unparsable.
    pub fn now() -> Self {
        Self::from_naive(Utc::now().naive_utc())
    }

    fn from_naive(dt: NaiveDateTime) -> Self {
        HugoDate {
            timestamp: dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string(),
            file_prefix: dt.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Convert free text (a bookmark description) into a filename-safe slug:
/// lowercase, word characters only, runs of whitespace/underscores/hyphens
/// collapsed into a single hyphen, no leading or trailing hyphen. Other
/// punctuation is stripped outright, so `don't` becomes `dont`, not `don-t`.
///
/// May return an empty string (all-punctuation input); the caller substitutes
/// a fallback.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            // Separators only materialize between word characters.
            pending_hyphen = !slug.is_empty();
        } else if c.is_alphanumeric() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello,  World!"), "hello-world");
    }

    #[test]
    fn slugify_strips_punctuation_without_hyphenating() {
        assert_eq!(slugify("Don't Panic (1979)"), "dont-panic-1979");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("a _ - b"), "a-b");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn slugify_trims_hyphens() {
        assert_eq!(slugify("--weird title--"), "weird-title");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn slugify_all_punctuation_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn parses_pinboard_timestamp() {
        let date = HugoDate::parse("2025-06-26T10:10:02Z").unwrap();
        assert_eq!(date.timestamp, "2025-06-26T10:10:02+00:00");
        assert_eq!(date.file_prefix, "2025-06-26");
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(HugoDate::parse("not-a-date").is_none());
        assert!(HugoDate::parse("2025-06-26 10:10:02").is_none());
        assert!(HugoDate::parse("2025-06-26T10:10:02.123Z").is_none());
        assert!(HugoDate::parse("2025-06-26T10:10:02+02:00").is_none());
    }
}
