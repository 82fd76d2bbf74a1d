//! PDF export - fills the HTML document template with a draft and prints it
//! through a headless browser.
//!
//! - `common` - file naming, template interpolation, timestamps
//! - `engine` - the per-request Chromium process

pub mod common;
pub mod engine;

pub use engine::{ChromeRenderEngine, RenderedPdf};

use std::path::PathBuf;
use thiserror::Error;

use common::{format_render_timestamp, interpolate, sanitize_filename};

/// Errors that can occur during PDF export.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("document template not found at {0}")]
    TemplateMissing(PathBuf),
    #[error("failed to load document template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write HTML source: {0}")]
    WriteHtml(#[source] std::io::Error),
    #[error("no file URL for path {0}")]
    InvalidPath(PathBuf),
    #[error("failed to launch headless browser: {0}")]
    BrowserIo(#[source] std::io::Error),
    #[error("headless browser exited with status {0}")]
    BrowserExit(i32),
    #[error("headless browser produced no PDF")]
    NoOutput,
}

/// Result of a successful export.
pub struct ExportedPdf {
    /// Download name, e.g. `Refund_Request.pdf`.
    pub filename: String,
    pub rendered: RenderedPdf,
}

impl ExportedPdf {
    pub fn path(&self) -> PathBuf {
        self.rendered.path()
    }
}

/// Exports drafts using a fixed HTML template.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    template_path: PathBuf,
    engine: ChromeRenderEngine,
}

impl PdfExporter {
    pub fn new(template_path: impl Into<PathBuf>, chrome_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            engine: ChromeRenderEngine::new(chrome_path),
        }
    }

    /// Load the template and fill it with the document's title, draft and the
    /// current time.
    pub async fn render_html(&self, document_name: &str, draft: &str) -> Result<String, PdfError> {
        let template = match tokio::fs::read_to_string(&self.template_path).await {
            Ok(template) => template,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PdfError::TemplateMissing(self.template_path.clone()))
            }
            Err(e) => return Err(PdfError::TemplateIo(e)),
        };

        let date = format_render_timestamp();
        Ok(interpolate(
            &template,
            &[("title", document_name), ("draft", draft), ("date", &date)],
        ))
    }

    pub async fn export(&self, document_name: &str, draft: &str) -> Result<ExportedPdf, PdfError> {
        let html = self.render_html(document_name, draft).await?;
        let rendered = self.engine.render(&html).await?;
        let filename = format!("{}.pdf", sanitize_filename(document_name));

        log::info!("Rendered PDF '{}'", filename);
        Ok(ExportedPdf { filename, rendered })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_template_reported() {
        let exporter = PdfExporter::new("/nonexistent/document.html", "chromium");
        let err = exporter.export("Letter", "Body").await.err().unwrap();
        assert!(matches!(err, PdfError::TemplateMissing(_)));
    }

    #[tokio::test]
    async fn test_render_html_fills_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document.html");
        std::fs::write(&path, "<h1>{{title}}</h1><pre>{{draft}}</pre><small>{{date}}</small>").unwrap();

        let exporter = PdfExporter::new(&path, "chromium");
        let html = exporter.render_html("Refund Request", "Dear <team>").await.unwrap();

        assert!(html.starts_with("<h1>Refund Request</h1><pre>Dear &lt;team&gt;</pre>"));
        assert!(!html.contains("{{date}}"));
    }

    #[test]
    fn test_shipped_template_has_slots() {
        let template = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/document.html"
        ))
        .unwrap();
        for slot in ["{{title}}", "{{draft}}", "{{date}}"] {
            assert!(template.contains(slot), "template lacks {}", slot);
        }
    }
}
