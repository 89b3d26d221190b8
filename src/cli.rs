// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Every flag is optional; defaults reproduce the fixed export run

use crate::util::is_safe_page_id;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PAGE_ID: &str = "360449";

#[derive(Parser, Debug)]
#[command(name = "confluence-export")]
#[command(about = "Export a wiki page and its direct children to HTML and PDF", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root page id to export
    #[arg(long, default_value = DEFAULT_PAGE_ID, value_parser = parse_page_id)]
    pub page_id: String,

    /// Directory in which page_<id>_content is created
    #[arg(long, default_value = ".")]
    pub output_root: PathBuf,

    /// Path to the wkhtmltopdf binary
    #[arg(long, default_value = "wkhtmltopdf")]
    pub wkhtmltopdf: PathBuf,
}

fn parse_page_id(s: &str) -> Result<String, String> {
    let id = s.trim();
    if id.is_empty() {
        return Err("page id must not be empty".into());
    }
    if !is_safe_page_id(id) {
        return Err("page id may only contain ASCII letters, digits, '-' and '_'".into());
    }
    Ok(id.to_string())
}
