//! Error types for canvas configuration.
//!
//! Pointer handling itself never fails; only building a canvas from
//! settings can.

use crate::types::ShapeId;
use thiserror::Error;

/// Errors that can occur while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error reading a settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed settings JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The palette has no colours to pick from
    #[error("Palette must contain at least one colour")]
    EmptyPalette,

    /// A size or distance threshold that must be positive and finite
    #[error("Invalid {name}: {value} (must be finite and > 0)")]
    InvalidThreshold { name: &'static str, value: f32 },

    /// The adjust clearance must be finite and not negative
    #[error("Invalid adjust gap: {0} (must be finite and >= 0)")]
    InvalidGap(f32),

    /// Two initial shapes share an id
    #[error("Shape {0} appears more than once in the initial shapes")]
    DuplicateShapeId(ShapeId),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
