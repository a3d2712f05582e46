//! Renders one bookmark as a Hugo content file: YAML frontmatter, blank
//! line, extended note as body.
//!
//! The frontmatter is written by hand rather than through a YAML serializer:
//! Hugo only needs this one fixed shape, and emitting it directly keeps the
//! output byte-stable across runs. Title and link use the literal block
//! scalar form (`key: |`) so embedded quotes, colons and brackets need no
//! escaping; tags are individually JSON-quoted, which is valid YAML
//! double-quoted style.

use crate::importer::Bookmark;
use crate::utils::HugoDate;
use std::io::Write;

/// Format a tag list as `["a", "b"]`, or `[]` when empty.
pub fn yaml_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "[]".to_string();
    }
    let quoted: Vec<String> = tags
        .iter()
        .map(|tag| serde_json::Value::String(tag.clone()).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Write the complete file content for one bookmark.
pub fn render_bookmark<W: Write>(
    writer: &mut W,
    bookmark: &Bookmark,
    date: &HugoDate,
) -> std::io::Result<()> {
    writeln!(writer, "---")?;
    writeln!(writer, "title: |")?;
    writeln!(writer, "  {}", bookmark.description)?;
    writeln!(writer, "date: {}", date.timestamp)?;
    writeln!(writer, "draft: false")?;
    writeln!(writer, "tags: {}", yaml_tag_list(&bookmark.tag_list()))?;
    writeln!(writer, "link: |")?;
    writeln!(writer, "  {}", bookmark.href)?;
    writeln!(writer, "categories: []")?;
    writeln!(writer, "---")?;
    writeln!(writer)?;
    writeln!(writer, "{}", bookmark.extended.trim())?;
    Ok(())
}
