use clap::Parser;
use eyre::{Context, Result, eyre};
use pinboard_hugo_import::process;
use pinboard_hugo_import::utils::ImportConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "blog/content/bookmarks";
const DEFAULT_TAG: &str = "cy-bookmark";

/// Import a Pinboard JSON export into Hugo markdown content files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Pinboard JSON export file
    /// (e.g. blog/data/pinboard_export.json).
    #[arg(value_name = "JSON_FILE")]
    json_file: PathBuf,

    /// Directory where the bookmark markdown files will be created.
    /// Defaults to blog/content/bookmarks if not set in config.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only import bookmarks that include this specific tag.
    /// Defaults to "cy-bookmark"; pass an empty string to import everything.
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/pinboard-hugo-import/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print each bookmark skipped by the tag filter.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the progress bar and console reporting.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    output_dir: Option<PathBuf>,
    tag: Option<String>,
}

fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        // Search: XDG/OS config dir, then nothing
        dirs::config_dir()
            .map(|d| d.join("pinboard-hugo-import/config.toml"))
            .filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve output_dir (CLI > Config > Default)
    let output_dir = cli
        .output_dir
        .or(file_cfg.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 3. Resolve tag (CLI > Config > Default); empty disables filtering
    let tag = cli
        .tag
        .or(file_cfg.tag)
        .unwrap_or_else(|| DEFAULT_TAG.to_string());
    let required_tag = if tag.is_empty() { None } else { Some(tag) };

    // 4. Build the Import Config
    let config = ImportConfig {
        json_file: cli.json_file,
        output_dir,
        required_tag,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // 5. Run the Business Logic
    process::execute(config)
}
