use std::path::PathBuf;
use tokio::sync::mpsc;

// Re-export types from library crates
pub use pdf_calibrate::{CalibrationProfile, DocumentInfo, LoadError, LoadFailureKind};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    ViewerLoad {
        path: PathBuf,
    },
    ViewerRenderPage {
        doc_id: DocumentId,
        page_index: usize,
    },
    /// Prefetch pages for faster navigation (lower priority than direct renders)
    ViewerPrefetchPages {
        doc_id: DocumentId,
        page_indices: Vec<usize>,
    },
    ViewerClose {
        doc_id: DocumentId,
    },
    ProfileLoad {
        path: PathBuf,
    },
    ProfileSave {
        path: PathBuf,
        profile: CalibrationProfile,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    Error {
        message: String,
    },
    /// Document ready: the renderer holds the document and geometry may be applied
    ViewerLoaded {
        doc_id: DocumentId,
        info: DocumentInfo,
    },
    /// The document could not be opened; whatever was showing stays loaded
    ViewerLoadFailed {
        error: LoadError,
    },
    ViewerPageRendered {
        doc_id: DocumentId,
        page_index: usize,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    ViewerClosed {
        doc_id: DocumentId,
    },
    ProfileLoaded {
        path: PathBuf,
        profile: CalibrationProfile,
    },
    ProfileSaved {
        path: PathBuf,
    },
}

/// Handle to a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

pub type CommandSender = mpsc::UnboundedSender<PdfCommand>;
pub type CommandReceiver = mpsc::UnboundedReceiver<PdfCommand>;
pub type UpdateSender = mpsc::UnboundedSender<PdfUpdate>;
pub type UpdateReceiver = mpsc::UnboundedReceiver<PdfUpdate>;
