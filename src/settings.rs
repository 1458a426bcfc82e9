//! Canvas settings.
//!
//! Every field has a default, so a settings file only needs the values it
//! wants to change:
//!
//! ```json
//! { "min_size_to_split": 40, "palette": ["#ff0000", "#00ff00"], "palette_seed": 7 }
//! ```

use crate::constants::{
    DEFAULT_ADJUST_GAP, DEFAULT_CURSOR, DEFAULT_MIN_SIZE_TO_DRAW, DEFAULT_MIN_SIZE_TO_SPLIT,
    DEFAULT_PALETTE, DEFAULT_TAP_DISTANCE, DEFAULT_TAP_TIME_MS,
};
use crate::error::{SettingsError, SettingsResult};
use crate::geometry::Point;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Minimum width and height for a drawn box to become a shape
    pub min_size_to_draw: f32,
    /// Minimum piece size on an axis for that axis to be cut
    pub min_size_to_split: f32,
    /// Colours assigned at random to new shapes
    pub palette: Vec<String>,
    /// Fixed seed for colour choice, for reproducible sessions
    pub palette_seed: Option<u64>,
    /// Release must be closer than this to the press to count as a tap
    pub tap_distance_threshold: f32,
    /// Release must come sooner than this after the press to count as a tap
    pub tap_time_threshold_ms: u64,
    /// Clearance between a shifted shape and the crosshair
    pub adjust_gap: f32,
    /// Cursor position reported before the first move
    pub initial_cursor: Point,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            min_size_to_draw: DEFAULT_MIN_SIZE_TO_DRAW,
            min_size_to_split: DEFAULT_MIN_SIZE_TO_SPLIT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            palette_seed: None,
            tap_distance_threshold: DEFAULT_TAP_DISTANCE,
            tap_time_threshold_ms: DEFAULT_TAP_TIME_MS,
            adjust_gap: DEFAULT_ADJUST_GAP,
            initial_cursor: DEFAULT_CURSOR.into(),
        }
    }
}

impl CanvasSettings {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded canvas settings");
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        positive("min_size_to_draw", self.min_size_to_draw)?;
        positive("min_size_to_split", self.min_size_to_split)?;
        positive("tap_distance_threshold", self.tap_distance_threshold)?;
        if !self.adjust_gap.is_finite() || self.adjust_gap < 0.0 {
            return Err(SettingsError::InvalidGap(self.adjust_gap));
        }
        if self.palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        Ok(())
    }

    pub fn palette(&self) -> SettingsResult<Palette> {
        Palette::new(self.palette.clone())
    }
}

fn positive(name: &'static str, value: f32) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidThreshold { name, value })
    }
}
