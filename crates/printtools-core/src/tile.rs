use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SPACING_MM, DEFAULT_TILE_MM, MIN_ASPECT_RATIO, MIN_EFFECTIVE_TILE_MM};

/// Tile geometry as edited by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    pub spacing_mm: f64,
    /// Derive tile height from the source image's aspect ratio.
    pub lock_aspect: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_TILE_MM,
            height_mm: DEFAULT_TILE_MM,
            spacing_mm: DEFAULT_SPACING_MM,
            lock_aspect: true,
        }
    }
}

/// Width/height ratio of a loaded image. Always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAspect(f64);

impl ImageAspect {
    /// `None` when either dimension is zero.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self(width as f64 / height as f64))
    }

    /// `None` unless `ratio` is finite and positive.
    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Tile height that keeps this ratio for the given width (unrounded).
    pub fn height_for_width(self, width_mm: f64) -> f64 {
        (width_mm / self.0.max(MIN_ASPECT_RATIO)).max(MIN_EFFECTIVE_TILE_MM)
    }
}
