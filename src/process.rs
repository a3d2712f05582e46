//! The sequential import loop: load the export, filter, convert, report.

use crate::importer::{self, Bookmark};
use crate::renderer;
use crate::utils::{self, HugoDate, ImportConfig, ProcessResult};
use eyre::{Context, Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// Substituted when a description slugifies to nothing.
const FALLBACK_SLUG: &str = "bookmark";

/// The main entry point for the import logic.
pub fn execute(config: ImportConfig) -> Result<()> {
    if !config.json_file.exists() {
        return Err(eyre!(
            "JSON input file not found at '{}'",
            config.json_file.display()
        ));
    }

    let bookmarks = importer::load_bookmarks(&config.json_file)?;

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
            format!(
                "Failed to create output directory: {}",
                config.output_dir.display()
            )
        })?;
        if !config.quiet {
            println!("Created output directory: {}", config.output_dir.display());
        }
    }

    let pb = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(bookmarks.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("=>-"),
        );
        bar.println(format!(
            "Found {} bookmarks in {}",
            bookmarks.len(),
            config.json_file.display()
        ));
        bar
    };
    if let Some(tag) = config.required_tag.as_deref() {
        pb.println(format!(
            "Filtering bookmarks to include only those with tag: '{}'",
            tag
        ));
    }

    let mut count_imported = 0usize;
    let mut count_skipped_filter = 0usize;

    for bookmark in &bookmarks {
        if let Some(tag) = config.required_tag.as_deref()
            && !bookmark.has_tag(tag)
        {
            count_skipped_filter += 1;
            if config.verbose {
                pb.println(format!("Skipped (tag): {}", bookmark.description));
            }
            pb.inc(1);
            continue;
        }

        import_bookmark(bookmark, &config, &pb)?;
        count_imported += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();

    if !config.quiet {
        eprintln!(
            "Import complete. Successfully imported {} bookmarks.",
            count_imported
        );
        if config.required_tag.is_some() {
            eprintln!(
                "Skipped {} bookmarks due to tag filter.",
                count_skipped_filter
            );
        }
    }

    Ok(())
}

/// Convert one bookmark into a markdown file under the output directory.
/// An existing file with the same name is overwritten.
fn import_bookmark(
    bookmark: &Bookmark,
    config: &ImportConfig,
    pb: &ProgressBar,
) -> Result<ProcessResult> {
    let date = match HugoDate::parse(&bookmark.time) {
        Some(date) => date,
        None => {
            pb.println(format!(
                "Warning: Could not parse date '{}'. Using current date and time for '{}'.",
                bookmark.time, bookmark.description
            ));
            HugoDate::now()
        }
    };

    let mut slug = utils::slugify(&bookmark.description);
    if slug.is_empty() {
        slug = FALLBACK_SLUG.to_string();
    }

    let path = config
        .output_dir
        .join(format!("{}-{}.md", date.file_prefix, slug));

    // Colliding date+slug pairs silently overwrite: last write wins.
    let result = if path.exists() {
        ProcessResult::Updated
    } else {
        ProcessResult::Created
    };

    let file =
        File::create(&path).wrap_err_with(|| format!("Failed to create: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    renderer::render_bookmark(&mut writer, bookmark, &date)
        .wrap_err_with(|| format!("Failed to write: {}", path.display()))?;
    writer.flush().wrap_err("Failed to flush markdown file")?;

    match result {
        ProcessResult::Created => pb.println(format!("Created:  {}", path.display())),
        ProcessResult::Updated => pb.println(format!("Updated:  {}", path.display())),
    }

    Ok(result)
}
