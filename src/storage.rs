// ABOUTME: Output directory layout and atomic file writes
// ABOUTME: Names artifacts by page id and sanitized title

use crate::util::sanitize_filename;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ExportLayout {
    pub output_dir: PathBuf,
}

impl ExportLayout {
    /// `base_dir/page_{root_id}_content`
    pub fn for_root(base_dir: &Path, root_id: &str) -> Self {
        ExportLayout {
            output_dir: base_dir.join(format!("page_{}_content", root_id)),
        }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Returns `(html_path, pdf_path)` for a page. Both stay inside `output_dir`.
    pub fn artifact_paths(&self, page_id: &str, title: &str) -> (PathBuf, PathBuf) {
        let stem = format!(
            "{}_{}",
            sanitize_filename(page_id),
            sanitize_filename(title)
        );
        (
            self.output_dir.join(format!("{}.html", stem)),
            self.output_dir.join(format!("{}.pdf", stem)),
        )
    }
}

/// Writes through a temp file in the target's directory, then renames.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    use rand::Rng;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let random: u32 = rand::thread_rng().gen();
    let tmp_path = dir.join(format!(".{:x}.part", random));

    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

pub fn write_html(path: &Path, html: &str) -> Result<()> {
    write_atomic(path, html.as_bytes())
}
