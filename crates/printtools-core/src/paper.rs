use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CUSTOM_HEIGHT_MM, DEFAULT_CUSTOM_WIDTH_MM, DEFAULT_MARGIN_MM};
use crate::error::PrintToolsError;

/// Named paper sizes, plus `Custom` for user-entered dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperPreset {
    A5,
    #[default]
    A4,
    A3,
    Letter,
    Legal,
    Custom,
}

impl PaperPreset {
    pub const ALL: [PaperPreset; 6] = [
        PaperPreset::A5,
        PaperPreset::A4,
        PaperPreset::A3,
        PaperPreset::Letter,
        PaperPreset::Legal,
        PaperPreset::Custom,
    ];

    /// Portrait (width, height) in mm. `Custom` reports its nominal default size.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperPreset::A5 => (148.0, 210.0),
            PaperPreset::A4 => (210.0, 297.0),
            PaperPreset::A3 => (297.0, 420.0),
            PaperPreset::Letter => (215.9, 279.4),
            PaperPreset::Legal => (215.9, 355.6),
            PaperPreset::Custom => (DEFAULT_CUSTOM_WIDTH_MM, DEFAULT_CUSTOM_HEIGHT_MM),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            PaperPreset::A5 => "a5",
            PaperPreset::A4 => "a4",
            PaperPreset::A3 => "a3",
            PaperPreset::Letter => "letter",
            PaperPreset::Legal => "legal",
            PaperPreset::Custom => "custom",
        }
    }

    /// Translation key of the human-readable label.
    pub fn label_key(self) -> &'static str {
        match self {
            PaperPreset::A5 => "paperLabelA5",
            PaperPreset::A4 => "paperLabelA4",
            PaperPreset::A3 => "paperLabelA3",
            PaperPreset::Letter => "paperLabelLetter",
            PaperPreset::Legal => "paperLabelLegal",
            PaperPreset::Custom => "paperLabelCustom",
        }
    }
}

impl fmt::Display for PaperPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaperPreset {
    type Err = PrintToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PaperPreset::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| PrintToolsError::UnknownPreset(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn label_key(self) -> &'static str {
        match self {
            Orientation::Portrait => "paperOrientationPortrait",
            Orientation::Landscape => "paperOrientationLandscape",
        }
    }

    /// Apply this orientation to portrait dimensions.
    pub fn orient(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

/// Paper selection as edited by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperConfig {
    pub preset: PaperPreset,
    pub custom_width_mm: f64,
    pub custom_height_mm: f64,
    pub orientation: Orientation,
    pub margin_mm: f64,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            preset: PaperPreset::A4,
            custom_width_mm: DEFAULT_CUSTOM_WIDTH_MM,
            custom_height_mm: DEFAULT_CUSTOM_HEIGHT_MM,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

impl PaperConfig {
    /// Portrait base size: the custom size for `Custom`, else the preset's.
    pub fn base_size_mm(&self) -> (f64, f64) {
        match self.preset {
            PaperPreset::Custom => (self.custom_width_mm, self.custom_height_mm),
            preset => preset.dimensions_mm(),
        }
    }

    /// Page size after orientation.
    pub fn page_size_mm(&self) -> (f64, f64) {
        let (w, h) = self.base_size_mm();
        self.orientation.orient(w, h)
    }
}
