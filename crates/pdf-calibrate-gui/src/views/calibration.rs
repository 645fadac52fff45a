use eframe::egui;
use pdf_async_runtime::{CommandSender, PdfCommand};
use pdf_calibrate::{Corner, DEFAULT_OVERLAY_LINES, MAX_GRID_LINES, MIN_GRID_LINES};

use super::ViewerState;
use crate::ui_components::{labeled_drag_clamped, point_editor};

pub fn show(ui: &mut egui::Ui, state: &mut ViewerState, command_tx: &CommandSender) {
    ui.heading("Calibration");
    ui.separator();

    let mut enabled = state.session.calibration.enabled;
    if ui.checkbox(&mut enabled, "Calibration mode").changed() {
        state.session.set_calibration_enabled(enabled);
    }

    if !enabled {
        ui.label(format!(
            "Showing the default {0}×{0} grid. Enable calibration mode to drag the corners.",
            DEFAULT_OVERLAY_LINES
        ));
    }

    ui.add_space(10.0);

    ui.add_enabled_ui(enabled, |ui| {
        grid_section(ui, state);
        ui.add_space(10.0);
        corners_section(ui, state);
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    profile_section(ui, state, command_tx);
}

fn grid_section(ui: &mut egui::Ui, state: &mut ViewerState) {
    egui::CollapsingHeader::new("▦ Grid")
        .default_open(true)
        .show(ui, |ui| {
            let grid = state.session.calibration.grid;
            let mut rows = grid.rows();
            let mut columns = grid.columns();

            let mut changed =
                labeled_drag_clamped(ui, "Rows:", &mut rows, MIN_GRID_LINES..=MAX_GRID_LINES);
            changed |= labeled_drag_clamped(
                ui,
                "Columns:",
                &mut columns,
                MIN_GRID_LINES..=MAX_GRID_LINES,
            );

            if changed {
                state.session.set_grid_size(rows, columns);
            }
        });
}

fn corners_section(ui: &mut egui::Ui, state: &mut ViewerState) {
    egui::CollapsingHeader::new("✥ Corners")
        .default_open(true)
        .show(ui, |ui| {
            for corner in Corner::ALL {
                let mut point = state.session.calibration.quad.corner(corner);
                if point_editor(ui, corner.label(), &mut point.x, &mut point.y) {
                    state.session.set_corner(corner, point);
                }
            }

            if ui.button("Reset corners").clicked() {
                state.session.reset_corners();
            }
        });
}

fn profile_section(ui: &mut egui::Ui, state: &ViewerState, command_tx: &CommandSender) {
    ui.label("Profile");
    ui.horizontal(|ui| {
        if ui.button("Load profile...").clicked() {
            match rfd::FileDialog::new()
                .add_filter("Calibration profile", &["json"])
                .pick_file()
            {
                Some(path) => {
                    let _ = command_tx.send(PdfCommand::ProfileLoad { path });
                }
                None => log::debug!("Profile picker cancelled"),
            }
        }

        if ui.button("Save profile...").clicked() {
            match rfd::FileDialog::new()
                .add_filter("Calibration profile", &["json"])
                .set_file_name("calibration.json")
                .save_file()
            {
                Some(path) => {
                    let _ = command_tx.send(PdfCommand::ProfileSave {
                        path,
                        profile: state.session.profile(),
                    });
                }
                None => log::debug!("Profile save dialog cancelled"),
            }
        }
    });
}
