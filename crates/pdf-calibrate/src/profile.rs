use crate::constants::{DEFAULT_CALIBRATION_COLUMNS, DEFAULT_CALIBRATION_ROWS, DEFAULT_ZOOM};
use crate::geometry::Quadrilateral;
use crate::grid::GridSpec;
use crate::types::*;

/// A saved calibration: corner placement, grid size and zoom
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationProfile {
    pub corners: Quadrilateral,
    pub rows: u32,
    pub columns: u32,
    pub zoom: f32,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            corners: Quadrilateral::default(),
            rows: DEFAULT_CALIBRATION_ROWS,
            columns: DEFAULT_CALIBRATION_COLUMNS,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CalibrationProfile {
    /// Load a profile from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let profile: Self = serde_json::from_slice(&bytes)
            .map_err(|e| CalibrateError::Config(format!("Failed to parse profile: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Save the profile to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CalibrateError::Config(format!("Failed to serialize profile: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn grid(&self) -> Result<GridSpec> {
        Ok(GridSpec::calibration(self.rows, self.columns)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.grid()?;

        if !self.corners.is_finite() {
            return Err(CalibrateError::Config(
                "Corner coordinates must be finite".to_string(),
            ));
        }

        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(CalibrateError::Config(format!(
                "Zoom must be a positive number (got {})",
                self.zoom
            )));
        }

        Ok(())
    }
}
