use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, CalibrateError>;

/// Why a document could not be opened
///
/// Kept `Clone` so it can travel from the worker to the UI inside an update.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Could not read {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
    #[error("Permission denied for {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("{} is not a PDF document: {reason}", .path.display())]
    NotAPdf { path: PathBuf, reason: String },
}

/// How a load failure is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    /// The document could not be read or parsed
    LoadFailed,
    /// File permissions or sandboxing refused access
    AccessDenied,
}

impl LoadError {
    pub fn kind(&self) -> LoadFailureKind {
        match self {
            LoadError::PermissionDenied { .. } => LoadFailureKind::AccessDenied,
            LoadError::Unreadable { .. } | LoadError::NotAPdf { .. } => {
                LoadFailureKind::LoadFailed
            }
        }
    }

    /// The file the failed load was for
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Unreadable { path, .. }
            | LoadError::PermissionDenied { path }
            | LoadError::NotAPdf { path, .. } => path,
        }
    }
}

/// Rejected grid dimensions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column (got {rows}×{columns})")]
    ZeroDimension { rows: u32, columns: u32 },
    #[error("Calibration grid size {rows}×{columns} is outside {min}..={max}")]
    OutOfRange {
        rows: u32,
        columns: u32,
        min: u32,
        max: u32,
    },
}
