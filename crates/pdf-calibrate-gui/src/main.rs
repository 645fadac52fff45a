#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod ui_components;
mod viewer;
mod views;
mod window;
mod worker;

/// Log lines kept for the in-app log panel
const MAX_LOG_ENTRIES: usize = 500;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES);
    logger
        .clone()
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("PDF Calibrate")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    log::info!("Starting PDF Calibrate");

    eframe::run_native(
        "PDF Calibrate",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::PdfCalibrateApp::new(
                cc,
                tokio_handle,
                logger,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run PDF Calibrate: {e}"))?;

    Ok(())
}
