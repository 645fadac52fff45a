use eframe::egui;

/// Handle on the application window, handed to the views that need it
#[derive(Clone)]
pub struct WindowController {
    ctx: egui::Context,
}

impl WindowController {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.ctx
            .input(|i| i.viewport().fullscreen)
            .unwrap_or(false)
    }

    pub fn toggle_fullscreen(&self) {
        let fullscreen = !self.is_fullscreen();
        log::debug!("Setting fullscreen: {}", fullscreen);
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.into()));
    }
}
