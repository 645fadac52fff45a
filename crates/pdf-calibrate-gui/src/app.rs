use eframe::egui;
use pdf_async_runtime::{LoadError, LoadFailureKind, PdfCommand, PdfUpdate};
use pdf_async_runtime::{CommandSender, UpdateReceiver};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{ViewerState, show_log_panel, show_viewer};
use crate::window::WindowController;

pub struct PdfCalibrateApp {
    status: String,

    // Async infrastructure
    command_tx: CommandSender,
    update_rx: UpdateReceiver,

    viewer: ViewerState,

    /// Shown in a modal until dismissed
    load_error: Option<LoadError>,

    window: WindowController,
    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl PdfCalibrateApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            status: String::new(),
            command_tx,
            update_rx,
            viewer: ViewerState::default(),
            load_error: None,
            window: WindowController::new(cc.egui_ctx.clone()),
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        // Only the last PDF matters; each load replaces the previous one
        if let Some(path) = dropped
            .into_iter()
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            })
            .last()
        {
            let _ = self.command_tx.send(PdfCommand::ViewerLoad { path });
            self.status = "Loading PDF...".to_string();
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                PdfUpdate::Error { message } => {
                    log::error!("{}", message);
                    self.status = format!("Error: {message}");
                }
                PdfUpdate::ViewerLoaded { doc_id, info } => {
                    self.status = format!(
                        "Loaded {} ({} pages)",
                        info.display_name(),
                        info.page_count
                    );
                    self.window
                        .set_title(format!("PDF Calibrate - {}", info.display_name()));

                    if let Some(replaced) = self.viewer.document_ready(doc_id, info) {
                        let _ = self
                            .command_tx
                            .send(PdfCommand::ViewerClose { doc_id: replaced });
                    }
                    self.viewer.request_current_page(&self.command_tx);
                }
                PdfUpdate::ViewerLoadFailed { error } => {
                    // The session keeps its current document
                    if let Err(error) = self.viewer.session.apply_load(Err(error)) {
                        self.status = format!(
                            "{}: {}",
                            load_failure_title(error.kind()),
                            error.path().display()
                        );
                        self.load_error = Some(error);
                    }
                }
                PdfUpdate::ViewerPageRendered {
                    doc_id,
                    page_index,
                    width,
                    height,
                    rgba_data,
                } => {
                    if self.viewer.wants_page(doc_id, page_index) {
                        self.viewer
                            .canvas
                            .set_page_image(ctx, width, height, &rgba_data);
                        self.status = self.viewer.session.navigator().label();
                        self.viewer.prefetch_neighbours(&self.command_tx);
                    } else {
                        log::debug!("Dropping stale render of page {}", page_index + 1);
                    }
                }
                PdfUpdate::ViewerClosed { doc_id } => {
                    if self.viewer.document_closed(doc_id) {
                        self.status = "Closed PDF".to_string();
                        self.window.set_title("PDF Calibrate");
                    }
                }
                PdfUpdate::ProfileLoaded { path, profile } => {
                    match self.viewer.session.apply_profile(&profile) {
                        Ok(()) => self.status = format!("Loaded profile {}", path.display()),
                        Err(e) => self.status = format!("Error: {e}"),
                    }
                }
                PdfUpdate::ProfileSaved { path } => {
                    self.status = format!("Saved profile {}", path.display());
                }
            }
            ctx.request_repaint();
        }
    }

    fn show_load_error(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.load_error else {
            return;
        };

        let title = load_failure_title(error.kind());

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("load_error")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading(title);
            ui.add_space(8.0);
            ui.label(error.to_string());
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || modal.should_close() {
            self.load_error = None;
        }
    }
}

impl eframe::App for PdfCalibrateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.process_updates(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.status.is_empty() {
                    if let Some(latest) = self.logger.latest_message() {
                        ui.weak(latest);
                    }
                } else {
                    ui.label(&self.status);
                }
            });
            show_log_panel(ui, &self.logger);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_viewer(
                ui,
                &mut self.viewer,
                &self.command_tx,
                &self.window,
                &mut self.status,
            );
        });

        self.show_load_error(ctx);
    }
}

fn load_failure_title(kind: LoadFailureKind) -> &'static str {
    match kind {
        LoadFailureKind::LoadFailed => "Could not open PDF",
        LoadFailureKind::AccessDenied => "Access denied",
    }
}
