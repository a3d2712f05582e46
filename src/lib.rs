//! # pinboard-hugo-import
//!
//! A CLI tool that imports a [Pinboard](https://pinboard.in) bookmark export
//! into Hugo markdown content files.
//!
//! ## What it does
//!
//! Pinboard's export format is a JSON array of bookmark records (URL,
//! description, extended note, timestamp, space-separated tags). This tool
//! reads that array and writes each bookmark as a standalone Markdown file
//! with YAML frontmatter (title, date, tags, link) suitable for a Hugo
//! content directory. Filenames are `<YYYY-MM-DD>-<slug>.md`, with the slug
//! derived from the bookmark description.
//!
//! The input file is only read — your export is never modified.
//!
//! ## Tag filtering
//!
//! By default only bookmarks tagged `cy-bookmark` are imported, so a full
//! account export can feed a curated bookmarks section. Pass `--tag` to pick
//! a different tag, or `--tag ""` to import everything.
//!
//! ## Usage
//!
//! ```sh
//! # Import into the default content directory
//! pinboard-hugo-import data/pinboard_export.json
//!
//! # Everything tagged "reading", into a custom directory
//! pinboard-hugo-import export.json --output-dir site/content/links --tag reading
//! ```
//!
//! Preferences can be persisted in `~/.config/pinboard-hugo-import/config.toml`.
//!
//! ## Re-running
//!
//! Imports are idempotent: an unchanged export reproduces byte-identical
//! files. Existing files with the same name are overwritten, so edits made to
//! imported files by hand do not survive a re-import.

pub mod importer;
pub mod process;
pub mod renderer;
pub mod utils;
