use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log_panel(ui: &mut egui::Ui, logger: &AppLogger) {
    egui::CollapsingHeader::new("📜 Log")
        .default_open(false)
        .show(ui, |ui| {
            if ui.small_button("Clear").clicked() {
                logger.clear();
            }

            egui::ScrollArea::vertical()
                .max_height(160.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.get_entries() {
                        let color = match entry.level {
                            Level::Error => ui.visuals().error_fg_color,
                            Level::Warn => ui.visuals().warn_fg_color,
                            _ => ui.visuals().text_color(),
                        };
                        ui.colored_label(
                            color,
                            format!(
                                "{} {:<5} {}: {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.target,
                                entry.message
                            ),
                        );
                    }
                });
        });
}
