//! Colour palette and random colour assignment for new shapes.

use crate::error::{SettingsError, SettingsResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A non-empty list of colour values.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> SettingsResult<Self> {
        if colors.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Picks palette colours uniformly at random.
pub struct ColorPicker {
    palette: Palette,
    rng: StdRng,
}

impl ColorPicker {
    /// Seeded from OS entropy.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(palette: Palette, seed: u64) -> Self {
        Self {
            palette,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pick(&mut self) -> String {
        let idx = self.rng.gen_range(0..self.palette.colors.len());
        self.palette.colors[idx].clone()
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}
