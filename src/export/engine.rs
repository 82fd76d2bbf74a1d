//! Headless Chromium rendering engine.
//!
//! Writes the populated HTML into a temporary directory, launches a fresh
//! browser process to print it, and hands back the open PDF file. Every
//! export gets its own browser and profile directory.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use reqwest::Url;
use tokio::process::Command;

use super::PdfError;

const HTML_FILENAME: &str = "document.html";
const PDF_FILENAME: &str = "document.pdf";

/// Budget of virtual time Chromium waits for pending loads before printing.
const VIRTUAL_TIME_BUDGET_MS: u32 = 10_000;

/// A rendered PDF living in its own temporary directory.
///
/// The directory is removed when this value is dropped.
pub struct RenderedPdf {
    dir: TempDir,
}

impl RenderedPdf {
    pub fn path(&self) -> PathBuf {
        self.dir.path().join(PDF_FILENAME)
    }
}

/// Launches one headless browser per render.
#[derive(Debug, Clone)]
pub struct ChromeRenderEngine {
    executable: PathBuf,
}

impl ChromeRenderEngine {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Render a complete HTML document to PDF.
    pub async fn render(&self, html: &str) -> Result<RenderedPdf, PdfError> {
        let dir = tempfile::tempdir().map_err(PdfError::TempDir)?;
        let html_path = dir.path().join(HTML_FILENAME);
        let pdf_path = dir.path().join(PDF_FILENAME);
        let profile_dir = dir.path().join("profile");

        tokio::fs::write(&html_path, html)
            .await
            .map_err(PdfError::WriteHtml)?;

        let url = file_url(&html_path)?;
        let output = Command::new(&self.executable)
            .args(chrome_args(&profile_dir, &pdf_path))
            .arg(url.as_str())
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(PdfError::BrowserIo)?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("Headless browser exited with status {}: {}", code, stderr.trim());
            return Err(PdfError::BrowserExit(code));
        }

        if !tokio::fs::try_exists(&pdf_path).await.unwrap_or(false) {
            return Err(PdfError::NoOutput);
        }

        Ok(RenderedPdf { dir })
    }
}

fn chrome_args(profile_dir: &Path, pdf_path: &Path) -> Vec<String> {
    vec![
        "--headless=new".to_string(),
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--disable-setuid-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-first-run".to_string(),
        "--no-pdf-header-footer".to_string(),
        "--run-all-compositor-stages-before-draw".to_string(),
        format!("--virtual-time-budget={}", VIRTUAL_TIME_BUDGET_MS),
        format!("--user-data-dir={}", profile_dir.display()),
        format!("--print-to-pdf={}", pdf_path.display()),
    ]
}

/// Percent-encoded `file://` URL for an absolute path.
fn file_url(path: &Path) -> Result<Url, PdfError> {
    Url::from_file_path(path).map_err(|_| PdfError::InvalidPath(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_args_target_paths() {
        let args = chrome_args(Path::new("/tmp/x/profile"), Path::new("/tmp/x/document.pdf"));
        assert!(args.contains(&"--print-to-pdf=/tmp/x/document.pdf".to_string()));
        assert!(args.contains(&"--user-data-dir=/tmp/x/profile".to_string()));
        assert!(args.iter().any(|a| a.starts_with("--headless")));
    }

    #[test]
    fn test_file_url() {
        assert_eq!(
            file_url(Path::new("/tmp/x/document.html")).unwrap().as_str(),
            "file:///tmp/x/document.html"
        );
    }

    #[test]
    fn test_file_url_escapes_reserved_characters() {
        let url = file_url(Path::new("/tmp/my docs #1/document.html")).unwrap();
        assert_eq!(url.as_str(), "file:///tmp/my%20docs%20%231/document.html");
        assert_eq!(url.to_file_path().unwrap(), Path::new("/tmp/my docs #1/document.html"));
    }

    #[test]
    fn test_relative_path_has_no_file_url() {
        let err = file_url(Path::new("relative/document.html")).unwrap_err();
        assert!(matches!(err, PdfError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn test_missing_executable_is_browser_io_error() {
        let engine = ChromeRenderEngine::new("/nonexistent/chromium-for-tests");
        let err = engine.render("<html></html>").await.err().unwrap();
        assert!(matches!(err, PdfError::BrowserIo(_)));
    }
}
