mod calibration;
mod log_panel;
mod overlay;
pub mod viewer;

pub use log_panel::show_log_panel;
pub use viewer::{ViewerState, open_pdf_dialog, show_viewer};
