//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Canvas builders and gesture drivers
//! - integration: Full pointer sequences through the canvas
//! - unit: Single-component tests through the public API

mod helpers;
mod unit;
