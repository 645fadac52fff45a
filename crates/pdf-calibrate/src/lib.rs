mod constants;
mod document;
mod geometry;
mod grid;
mod navigation;
mod profile;
mod session;
mod types;
mod viewport;

pub use constants::*;
pub use document::{DocumentInfo, has_pdf_header, load_document};
pub use geometry::*;
pub use grid::*;
pub use navigation::PageNavigator;
pub use profile::CalibrationProfile;
pub use session::{CalibrationState, ViewerSession};
pub use types::*;
pub use viewport::*;
