//! Document loading
//!
//! Opening a document only validates it and counts its pages; rasterising
//! pages is the renderer's job.

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::types::LoadError;

/// PDF files may carry up to 1 KiB of junk before the header
const HEADER_SEARCH_WINDOW: usize = 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A successfully opened document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub page_count: usize,
}

impl DocumentInfo {
    /// File name for window titles and status lines
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Open the PDF at `path` and count its pages.
pub async fn load_document(path: impl AsRef<Path>) -> Result<DocumentInfo, LoadError> {
    let path = path.as_ref().to_owned();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| classify_io_error(&path, e))?;

    if !has_pdf_header(&bytes) {
        return Err(LoadError::NotAPdf {
            path,
            reason: "missing %PDF- header".to_string(),
        });
    }

    // Parsing is CPU-bound
    let parsed = tokio::task::spawn_blocking(move || {
        Document::load_mem(&bytes).map(|doc| doc.get_pages().len())
    })
    .await;

    match parsed {
        Ok(Ok(page_count)) => Ok(DocumentInfo { path, page_count }),
        Ok(Err(e)) => Err(LoadError::NotAPdf {
            path,
            reason: e.to_string(),
        }),
        Err(e) => Err(LoadError::Unreadable {
            path,
            message: format!("Task join error: {}", e),
        }),
    }
}

pub fn has_pdf_header(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    window
        .windows(PDF_MAGIC.len())
        .any(|candidate| candidate == PDF_MAGIC)
}

fn classify_io_error(path: &Path, error: std::io::Error) -> LoadError {
    match error.kind() {
        std::io::ErrorKind::PermissionDenied => LoadError::PermissionDenied {
            path: path.to_owned(),
        },
        _ => LoadError::Unreadable {
            path: path.to_owned(),
            message: error.to_string(),
        },
    }
}
