use pdf_async_runtime::{CalibrationProfile, PdfUpdate, UpdateSender};
use std::path::PathBuf;

pub async fn handle_load(path: PathBuf, update_tx: &UpdateSender) {
    match CalibrationProfile::load(&path).await {
        Ok(profile) => {
            log::info!("Loaded calibration profile {}", path.display());
            let _ = update_tx.send(PdfUpdate::ProfileLoaded { path, profile });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to load profile {}: {}", path.display(), e),
            });
        }
    }
}

pub async fn handle_save(path: PathBuf, profile: CalibrationProfile, update_tx: &UpdateSender) {
    match profile.save(&path).await {
        Ok(()) => {
            log::info!("Saved calibration profile {}", path.display());
            let _ = update_tx.send(PdfUpdate::ProfileSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to save profile {}: {}", path.display(), e),
            });
        }
    }
}
