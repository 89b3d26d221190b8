// ABOUTME: Core export logic for a root page and its direct children
// ABOUTME: Writes one HTML and one PDF per page, skipping pages without a body

use crate::{
    api::ApiClient,
    render::PdfRenderer,
    report::write_user_banner,
    storage::{write_html, ExportLayout},
    util::is_safe_page_id,
    Page, Result,
};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Exported,
    Skipped,
}

pub struct Exporter<'a, R: PdfRenderer> {
    client: &'a ApiClient,
    renderer: &'a R,
}

impl<'a, R: PdfRenderer> Exporter<'a, R> {
    pub fn new(client: &'a ApiClient, renderer: &'a R) -> Self {
        Exporter { client, renderer }
    }

    /// Fetches a page and writes its HTML and PDF. A page without a storage
    /// body is reported and skipped without touching the filesystem.
    pub fn download_page(
        &self,
        page_id: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<PageOutcome> {
        match self.client.get_page_content(page_id)? {
            Some(page) => {
                self.write_page(&page, html_path, pdf_path)?;
                Ok(PageOutcome::Exported)
            }
            None => {
                println!("Failed to retrieve page {}. Skipping.", page_id);
                Ok(PageOutcome::Skipped)
            }
        }
    }

    fn write_page(&self, page: &Page, html_path: &Path, pdf_path: &Path) -> Result<()> {
        write_html(html_path, &page.html)?;
        self.renderer.render(html_path, pdf_path)?;
        tracing::info!(id = %page.id, title = %page.title, "exported page");
        Ok(())
    }

    /// Exports the root page, then each direct child into the same directory.
    pub fn download_page_and_subpages(
        &self,
        root_id: &str,
        layout: &ExportLayout,
    ) -> Result<ExportSummary> {
        layout.ensure_dir()?;
        let mut summary = ExportSummary::default();

        let root = match self.client.get_page_content(root_id)? {
            Some(page) => page,
            None => {
                summary.skipped += 1;
                return Ok(summary);
            }
        };

        let (html_path, pdf_path) = layout.artifact_paths(root_id, &root.title);
        self.write_page(&root, &html_path, &pdf_path)?;
        summary.exported += 1;

        let children = self.client.get_child_pages(root_id)?;
        tracing::debug!(count = children.len(), root_id, "fetched child pages");

        for child in &children {
            if !is_safe_page_id(&child.id) {
                println!(
                    "Skipping sub-page {} with invalid ID: {:?}",
                    child.title, child.id
                );
                tracing::warn!(id = %child.id, "unsafe child page id");
                summary.skipped += 1;
                continue;
            }

            let (html_path, pdf_path) = layout.artifact_paths(&child.id, &child.title);
            println!("Downloading sub-page: {} (ID: {})", child.title, child.id);
            match self.download_page(&child.id, &html_path, &pdf_path)? {
                PageOutcome::Exported => summary.exported += 1,
                PageOutcome::Skipped => summary.skipped += 1,
            }
        }

        tracing::info!(
            exported = summary.exported,
            skipped = summary.skipped,
            dir = %layout.output_dir.display(),
            "export finished"
        );

        Ok(summary)
    }
}

/// Verifies credentials, prints the account banner, then exports the tree.
pub fn run<R: PdfRenderer, W: std::io::Write>(
    client: &ApiClient,
    renderer: &R,
    root_id: &str,
    layout: &ExportLayout,
    out: &mut W,
) -> Result<ExportSummary> {
    let user = client.get_current_user()?;
    write_user_banner(out, &user)?;
    out.flush()?;

    Exporter::new(client, renderer).download_page_and_subpages(root_id, layout)
}
