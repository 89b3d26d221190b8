// ABOUTME: HTML to PDF conversion through an external renderer
// ABOUTME: Runs wkhtmltopdf as a blocking subprocess behind a trait seam

use crate::util::truncate_str;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait PdfRenderer {
    fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()>;
}

pub struct Wkhtmltopdf {
    binary: PathBuf,
}

impl Default for Wkhtmltopdf {
    fn default() -> Self {
        Wkhtmltopdf {
            binary: PathBuf::from("wkhtmltopdf"),
        }
    }
}

impl Wkhtmltopdf {
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    fn command(&self, html_path: &Path, pdf_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--quiet").arg(html_path).arg(pdf_path);
        cmd
    }
}

impl PdfRenderer for Wkhtmltopdf {
    fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        tracing::debug!(
            binary = %self.binary.display(),
            html = %html_path.display(),
            pdf = %pdf_path.display(),
            "rendering PDF"
        );

        let output = self.command(html_path, pdf_path).output().map_err(|e| {
            Error::Conversion(format!(
                "Failed to run {}: {}. Is wkhtmltopdf installed?",
                self.binary.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Conversion(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                truncate_str(stderr.trim(), 300)
            )));
        }

        Ok(())
    }
}
