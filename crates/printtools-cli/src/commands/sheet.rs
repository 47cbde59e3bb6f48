use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use printtools_core::config::SheetConfig;
use printtools_core::field::CommitOutcome;
use printtools_core::form::{FieldId, TilingForm};
use printtools_core::paper::{Orientation, PaperPreset};
use printtools_core::tile::ImageAspect;
use tracing::warn;

/// Paper and tile options shared by `layout` and `render`.
///
/// Numeric values are taken as text and committed through the same
/// sanitation as the GUI inputs.
#[derive(Args, Debug, Default)]
pub struct SheetArgs {
    /// TOML sheet config to start from (see `printtools config`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Paper size (a5, a4, a3, letter, legal, custom)
    #[arg(long)]
    pub paper: Option<String>,

    /// Landscape orientation
    #[arg(long)]
    pub landscape: bool,

    /// Page margin in mm
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<String>,

    /// Custom paper width in mm (with --paper custom)
    #[arg(long)]
    pub custom_width: Option<String>,

    /// Custom paper height in mm (with --paper custom)
    #[arg(long)]
    pub custom_height: Option<String>,

    /// Tile width in mm
    #[arg(long)]
    pub tile_width: Option<String>,

    /// Tile height in mm (ignored while the image aspect is locked)
    #[arg(long)]
    pub tile_height: Option<String>,

    /// Gap between tiles in mm
    #[arg(long)]
    pub spacing: Option<String>,

    /// Do not derive tile height from the image aspect ratio
    #[arg(long)]
    pub no_lock_aspect: bool,
}

impl SheetArgs {
    fn load_config(&self) -> Result<SheetConfig> {
        let Some(ref path) = self.config else {
            return Ok(SheetConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Build the form: config file first, then command-line overrides.
    pub fn build_form(&self, aspect: Option<ImageAspect>) -> Result<TilingForm> {
        let mut form = TilingForm::from_config(&self.load_config()?);

        if let Some(ref name) = self.paper {
            let preset: PaperPreset = name
                .parse()
                .with_context(|| format!("Unsupported --paper value '{name}'"))?;
            form.set_preset(preset);
        }
        if self.landscape {
            form.set_orientation(Orientation::Landscape);
        }
        if self.no_lock_aspect {
            form.set_lock_aspect(false);
        }
        form.set_image_aspect(aspect);

        let overrides = [
            (FieldId::CustomWidth, &self.custom_width),
            (FieldId::CustomHeight, &self.custom_height),
            (FieldId::Margin, &self.margin),
            (FieldId::TileWidth, &self.tile_width),
            (FieldId::TileHeight, &self.tile_height),
            (FieldId::Spacing, &self.spacing),
        ];
        for (id, raw) in overrides {
            let Some(raw) = raw else { continue };
            if form.is_read_only(id) {
                warn!("Ignoring {id} '{raw}': it follows the image aspect ratio");
                continue;
            }
            if let CommitOutcome::Reverted { value } = form.submit_text(id, raw) {
                warn!("Ignoring invalid {id} '{raw}', keeping {value}");
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SheetArgs {
        SheetArgs::default()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let form = args().build_form(None).unwrap();
        assert_eq!(form.layout().total(), 15);
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let sheet = SheetArgs {
            paper: Some("custom".into()),
            custom_width: Some("10".into()),
            margin: Some("abc".into()),
            ..args()
        };
        let form = sheet.build_form(None).unwrap();
        assert_eq!(form.field(FieldId::CustomWidth).value(), 210.0);
        assert_eq!(form.field(FieldId::Margin).value(), 10.0);
    }

    #[test]
    fn test_locked_height_follows_width() {
        let sheet = SheetArgs {
            tile_width: Some("100".into()),
            tile_height: Some("10".into()),
            ..args()
        };
        let form = sheet.build_form(ImageAspect::new(2.0)).unwrap();
        assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);

        let unlocked = SheetArgs {
            no_lock_aspect: true,
            ..sheet
        };
        let form = unlocked.build_form(ImageAspect::new(2.0)).unwrap();
        assert_eq!(form.field(FieldId::TileHeight).value(), 10.0);
    }

    #[test]
    fn test_unknown_paper_is_an_error() {
        let sheet = SheetArgs {
            paper: Some("b5".into()),
            ..args()
        };
        assert!(sheet.build_form(None).is_err());
    }
}
