//! Canvas-wide constants.
//!
//! Centralizes the default thresholds and colours so the settings layer and
//! the tests agree on the same numbers.

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Minimum width/height of a drawn box for it to become a shape
pub const DEFAULT_MIN_SIZE_TO_DRAW: f32 = 20.0;

/// Minimum size of each resulting piece for an axis to be split
pub const DEFAULT_MIN_SIZE_TO_SPLIT: f32 = 30.0;

/// A release closer than this to the press point may count as a tap
pub const DEFAULT_TAP_DISTANCE: f32 = 4.0;

/// A release sooner than this after the press may count as a tap
pub const DEFAULT_TAP_TIME_MS: u64 = 300;

/// Clearance between the crosshair and a shape shifted by the adjust policy
pub const DEFAULT_ADJUST_GAP: f32 = 2.0;

// ============================================================================
// Cursor
// ============================================================================

/// Crosshair position reported before the pointer has moved
pub const DEFAULT_CURSOR: (f32, f32) = (200.0, 200.0);

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Pastel fills assigned to newly drawn pills
pub const DEFAULT_PALETTE: &[&str] = &[
    "#fca5a5", "#fdba74", "#fde047", "#86efac", "#67e8f9", "#93c5fd", "#c4b5fd", "#f9a8d4",
];

// ============================================================================
// Profiling
// ============================================================================

/// Handlers slower than this are reported when profiling is enabled
pub const SLOW_HANDLER_MS: f64 = 1.0;
