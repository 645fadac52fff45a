use eframe::egui;
use pdf_async_runtime::{CommandSender, DocumentId, PdfCommand};
use pdf_calibrate::{DocumentInfo, MAX_ZOOM, MIN_ZOOM, Point2D, RenderViewport, ViewerSession};

use super::{calibration, overlay};
use crate::ui_components::SliderBuilder;
use crate::viewer::RENDER_SCALE;
use crate::window::WindowController;

/// Pages either side of the current one to warm the worker cache with
const PREFETCH_RADIUS: usize = 2;

/// The rendered page as drawn on the canvas
pub struct PageCanvas {
    texture: Option<egui::TextureHandle>,
    scale: f32,
    origin: Point2D,
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self {
            texture: None,
            scale: 1.0,
            origin: Point2D::ZERO,
        }
    }
}

impl RenderViewport for PageCanvas {
    fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    fn set_origin(&mut self, origin: Point2D) {
        self.origin = origin;
    }
}

impl PageCanvas {
    /// Forget the page and fall back to unit scale, as for a fresh document
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_page(&self) -> bool {
        self.texture.is_some()
    }

    pub fn set_page_image(
        &mut self,
        ctx: &egui::Context,
        width: usize,
        height: usize,
        rgba_data: &[u8],
    ) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied([width, height], rgba_data);

        if let Some(texture) = &mut self.texture {
            texture.set(color_image, egui::TextureOptions::LINEAR);
        } else {
            self.texture =
                Some(ctx.load_texture("pdf_page", color_image, egui::TextureOptions::LINEAR));
        }
    }

    /// Where the page lands on screen for a canvas occupying `canvas`
    pub fn page_rect(&self, canvas: egui::Rect) -> Option<egui::Rect> {
        let texture = self.texture.as_ref()?;
        let size = texture.size_vec2() / RENDER_SCALE * self.scale;
        let min = canvas.min - egui::vec2(self.origin.x, self.origin.y);
        Some(egui::Rect::from_min_size(min, size))
    }

    fn paint(&self, painter: &egui::Painter, canvas: egui::Rect) {
        if let (Some(texture), Some(rect)) = (&self.texture, self.page_rect(canvas)) {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.rect_filled(rect.expand(1.0), 0.0, egui::Color32::from_gray(90));
            painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
        }
    }
}

/// Everything the viewer window shows
#[derive(Default)]
pub struct ViewerState {
    pub doc_id: Option<DocumentId>,
    pub session: ViewerSession,
    pub canvas: PageCanvas,
}

impl ViewerState {
    /// Adopt a document the worker reports as ready.
    ///
    /// Returns the handle of the document it replaces, which the caller
    /// should close.
    pub fn document_ready(&mut self, doc_id: DocumentId, info: DocumentInfo) -> Option<DocumentId> {
        if let Ok(Some(replaced)) = self.session.apply_load(Ok(info)) {
            log::debug!("Replacing {}", replaced.display_name());
        }
        let previous = self.doc_id.replace(doc_id);

        // The fresh canvas starts at unit scale; restore the user's view on top
        self.canvas.reset();
        self.session.pan_zoom_mut().on_document_ready(&mut self.canvas);

        previous.filter(|id| *id != doc_id)
    }

    /// Returns true if `doc_id` was the document on screen
    pub fn document_closed(&mut self, doc_id: DocumentId) -> bool {
        if self.doc_id != Some(doc_id) {
            return false;
        }
        self.doc_id = None;
        self.session.close();
        self.canvas.reset();
        true
    }

    /// Whether a rendered page is the one currently wanted
    pub fn wants_page(&self, doc_id: DocumentId, page_index: usize) -> bool {
        self.doc_id == Some(doc_id) && self.session.navigator().current() == page_index
    }

    pub fn request_current_page(&self, command_tx: &CommandSender) {
        if let Some(doc_id) = self.doc_id {
            let _ = command_tx.send(PdfCommand::ViewerRenderPage {
                doc_id,
                page_index: self.session.navigator().current(),
            });
        }
    }

    pub fn prefetch_neighbours(&self, command_tx: &CommandSender) {
        let Some(doc_id) = self.doc_id else {
            return;
        };
        let nav = self.session.navigator();
        let current = nav.current();
        let page_indices: Vec<usize> = (current.saturating_sub(PREFETCH_RADIUS)
            ..=current + PREFETCH_RADIUS)
            .filter(|&index| index != current && index < nav.total())
            .collect();

        if !page_indices.is_empty() {
            let _ = command_tx.send(PdfCommand::ViewerPrefetchPages {
                doc_id,
                page_indices,
            });
        }
    }

    pub fn next_page(&mut self, command_tx: &CommandSender) {
        if self.session.navigator_mut().next() {
            self.request_current_page(command_tx);
        }
    }

    pub fn previous_page(&mut self, command_tx: &CommandSender) {
        if self.session.navigator_mut().previous() {
            self.request_current_page(command_tx);
        }
    }

    pub fn close(&self, command_tx: &CommandSender) {
        if let Some(doc_id) = self.doc_id {
            let _ = command_tx.send(PdfCommand::ViewerClose { doc_id });
        }
    }
}

/// Show the native picker and ask the worker to open the chosen PDF
pub fn open_pdf_dialog(command_tx: &CommandSender, status: &mut String) {
    match rfd::FileDialog::new().add_filter("PDF", &["pdf"]).pick_file() {
        Some(path) => {
            let _ = command_tx.send(PdfCommand::ViewerLoad { path });
            *status = "Loading PDF...".to_string();
        }
        None => log::debug!("PDF picker cancelled"),
    }
}

pub fn show_viewer(
    ui: &mut egui::Ui,
    state: &mut ViewerState,
    command_tx: &CommandSender,
    window: &WindowController,
    status: &mut String,
) {
    handle_shortcuts(ui, state, command_tx, window);

    egui::TopBottomPanel::top("viewer_toolbar").show_inside(ui, |ui| {
        show_toolbar(ui, state, command_tx, window, status);
    });

    egui::SidePanel::right("calibration_controls")
        .min_width(260.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                calibration::show(ui, state, command_tx);
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        show_canvas(ui, state);
    });
}

fn handle_shortcuts(
    ui: &egui::Ui,
    state: &mut ViewerState,
    command_tx: &CommandSender,
    window: &WindowController,
) {
    if ui.ctx().wants_keyboard_input() {
        return;
    }

    let (next, previous, zoom_in, zoom_out, fullscreen) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown),
            i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::F11),
        )
    });

    if next {
        state.next_page(command_tx);
    }
    if previous {
        state.previous_page(command_tx);
    }
    if zoom_in {
        state.session.pan_zoom_mut().zoom_in();
    }
    if zoom_out {
        state.session.pan_zoom_mut().zoom_out();
    }
    if fullscreen {
        window.toggle_fullscreen();
    }
}

fn show_toolbar(
    ui: &mut egui::Ui,
    state: &mut ViewerState,
    command_tx: &CommandSender,
    window: &WindowController,
    status: &mut String,
) {
    ui.horizontal(|ui| {
        if ui.button("📂 Open PDF...").clicked() {
            open_pdf_dialog(command_tx, status);
        }

        ui.separator();

        let nav = *state.session.navigator();
        if ui
            .add_enabled(nav.can_go_back(), egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.previous_page(command_tx);
        }

        ui.label(nav.label());

        if ui
            .add_enabled(nav.can_go_forward(), egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_page(command_tx);
        }

        ui.separator();

        let pan_zoom = state.session.pan_zoom_mut();
        if ui
            .add_enabled(pan_zoom.can_zoom_out(), egui::Button::new("➖"))
            .clicked()
        {
            pan_zoom.zoom_out();
        }

        let mut zoom = pan_zoom.zoom();
        if SliderBuilder::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
            .text("Zoom")
            .suffix("×")
            .show(ui)
        {
            pan_zoom.set_zoom(zoom);
        }

        if ui
            .add_enabled(pan_zoom.can_zoom_in(), egui::Button::new("➕"))
            .clicked()
        {
            pan_zoom.zoom_in();
        }

        if ui.button("Reset view").clicked() {
            pan_zoom.reset();
        }

        ui.separator();

        let fullscreen_label = if window.is_fullscreen() {
            "Exit fullscreen"
        } else {
            "⛶ Fullscreen"
        };
        if ui.button(fullscreen_label).clicked() {
            window.toggle_fullscreen();
        }

        if state.doc_id.is_some() && ui.button("Close PDF").clicked() {
            state.close(command_tx);
        }
    });
}

fn show_canvas(ui: &mut egui::Ui, state: &mut ViewerState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
    let canvas = response.rect;

    painter.rect_filled(canvas, 0.0, ui.visuals().extreme_bg_color);

    let session = &mut state.session;
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            session.pointer_pressed(overlay::to_canvas(canvas, pos), overlay::GRAB_RADIUS);
        }
    }
    if response.dragged() {
        let delta = response.drag_delta();
        session.pointer_dragged(Point2D::new(delta.x, delta.y));
    }
    if response.drag_stopped() {
        session.pointer_released();
    }

    let hovered_corner = if session.calibration.enabled {
        response
            .hover_pos()
            .and_then(|pos| overlay::corner_under(canvas, &*session, pos))
    } else {
        None
    };
    if session.pan_zoom().is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if session.dragged_corner().is_some() || hovered_corner.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    state.session.pan_zoom().apply(&mut state.canvas);

    if state.canvas.has_page() {
        state.canvas.paint(&painter, canvas);
    } else {
        let message = if state.session.has_document() {
            "Rendering page..."
        } else {
            "Open a PDF or drop one here"
        };
        painter.text(
            canvas.center(),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(18.0),
            ui.visuals().weak_text_color(),
        );
    }

    overlay::paint_grid(&painter, canvas, &state.session);

    if state.session.calibration.enabled {
        let highlighted = state.session.dragged_corner().or(hovered_corner);
        overlay::paint_corner_handles(
            &painter,
            canvas,
            &state.session,
            highlighted,
            ui.visuals().strong_text_color(),
        );
    }
}
