use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::config::SheetConfig;
use crate::consts::{
    ASPECT_SYNC_TOLERANCE_MM, FIELD_PRECISION, MIN_CUSTOM_PAPER_MM, MIN_EFFECTIVE_TILE_MM, MIN_TILE_MM,
};
use crate::field::{CommitOutcome, FieldSpec, NumericField};
use crate::layout::{compute_layout, TileLayout};
use crate::paper::{Orientation, PaperConfig, PaperPreset};
use crate::tile::{ImageAspect, TileConfig};
use crate::units::round_to;

/// The numeric inputs of the tiling page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    CustomWidth,
    CustomHeight,
    Margin,
    TileWidth,
    TileHeight,
    Spacing,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::CustomWidth,
        FieldId::CustomHeight,
        FieldId::Margin,
        FieldId::TileWidth,
        FieldId::TileHeight,
        FieldId::Spacing,
    ];

    pub fn spec(self) -> FieldSpec {
        match self {
            FieldId::CustomWidth | FieldId::CustomHeight => FieldSpec::rejecting(MIN_CUSTOM_PAPER_MM),
            FieldId::Margin | FieldId::Spacing => FieldSpec::clamped(0.0),
            FieldId::TileWidth | FieldId::TileHeight => FieldSpec::clamped(MIN_TILE_MM),
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            FieldId::CustomWidth => "paperCustomWidth",
            FieldId::CustomHeight => "paperCustomHeight",
            FieldId::Margin => "paperMarginLabel",
            FieldId::TileWidth => "tileWidthLabel",
            FieldId::TileHeight => "tileHeightLabel",
            FieldId::Spacing => "tileSpacingLabel",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldId::CustomWidth => "custom width",
            FieldId::CustomHeight => "custom height",
            FieldId::Margin => "margin",
            FieldId::TileWidth => "tile width",
            FieldId::TileHeight => "tile height",
            FieldId::Spacing => "spacing",
        };
        f.write_str(name)
    }
}

/// Editable state of the tiling page: paper, tiles, and the loaded image's aspect.
#[derive(Clone, Debug)]
pub struct TilingForm {
    preset: PaperPreset,
    orientation: Orientation,
    lock_aspect: bool,
    aspect: Option<ImageAspect>,
    custom_width: NumericField,
    custom_height: NumericField,
    margin: NumericField,
    tile_width: NumericField,
    tile_height: NumericField,
    spacing: NumericField,
}

impl Default for TilingForm {
    fn default() -> Self {
        Self::from_config(&SheetConfig::default())
    }
}

impl TilingForm {
    pub fn from_config(config: &SheetConfig) -> Self {
        let field = |id: FieldId, value: f64| NumericField::new(id.spec(), value);
        Self {
            preset: config.paper.preset,
            orientation: config.paper.orientation,
            lock_aspect: config.tile.lock_aspect,
            aspect: None,
            custom_width: field(FieldId::CustomWidth, config.paper.custom_width_mm),
            custom_height: field(FieldId::CustomHeight, config.paper.custom_height_mm),
            margin: field(FieldId::Margin, config.paper.margin_mm),
            tile_width: field(FieldId::TileWidth, config.tile.width_mm),
            tile_height: field(FieldId::TileHeight, config.tile.height_mm),
            spacing: field(FieldId::Spacing, config.tile.spacing_mm),
        }
    }

    pub fn paper_config(&self) -> PaperConfig {
        PaperConfig {
            preset: self.preset,
            custom_width_mm: self.custom_width.value(),
            custom_height_mm: self.custom_height.value(),
            orientation: self.orientation,
            margin_mm: self.margin.value(),
        }
    }

    pub fn tile_config(&self) -> TileConfig {
        TileConfig {
            width_mm: self.tile_width.value(),
            height_mm: self.tile_height.value(),
            spacing_mm: self.spacing.value(),
            lock_aspect: self.lock_aspect,
        }
    }

    pub fn sheet_config(&self) -> SheetConfig {
        SheetConfig {
            paper: self.paper_config(),
            tile: self.tile_config(),
        }
    }

    /// Current grid, recomputed from the committed values.
    pub fn layout(&self) -> TileLayout {
        compute_layout(&self.paper_config(), &self.tile_config(), self.aspect)
    }

    pub fn field(&self, id: FieldId) -> &NumericField {
        match id {
            FieldId::CustomWidth => &self.custom_width,
            FieldId::CustomHeight => &self.custom_height,
            FieldId::Margin => &self.margin,
            FieldId::TileWidth => &self.tile_width,
            FieldId::TileHeight => &self.tile_height,
            FieldId::Spacing => &self.spacing,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut NumericField {
        match id {
            FieldId::CustomWidth => &mut self.custom_width,
            FieldId::CustomHeight => &mut self.custom_height,
            FieldId::Margin => &mut self.margin,
            FieldId::TileWidth => &mut self.tile_width,
            FieldId::TileHeight => &mut self.tile_height,
            FieldId::Spacing => &mut self.spacing,
        }
    }

    pub fn preset(&self) -> PaperPreset {
        self.preset
    }

    pub fn set_preset(&mut self, preset: PaperPreset) {
        self.preset = preset;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn lock_aspect(&self) -> bool {
        self.lock_aspect
    }

    pub fn image_aspect(&self) -> Option<ImageAspect> {
        self.aspect
    }

    /// Tile height follows the image while the lock is on and an aspect is known.
    pub fn aspect_locked(&self) -> bool {
        self.lock_aspect && self.aspect.is_some()
    }

    /// Whether the input for `id` accepts edits.
    pub fn is_read_only(&self, id: FieldId) -> bool {
        id == FieldId::TileHeight && self.aspect_locked()
    }

    /// Turning the lock on without a loaded image is remembered and applied
    /// once an aspect becomes known.
    pub fn set_lock_aspect(&mut self, lock: bool) {
        self.lock_aspect = lock;
        self.sync_locked_height();
    }

    pub fn set_image_aspect(&mut self, aspect: Option<ImageAspect>) {
        self.aspect = aspect;
        self.sync_locked_height();
    }

    /// Record a keystroke in `id`. Ignored for read-only inputs.
    pub fn edit(&mut self, id: FieldId, raw: impl Into<String>, now: Instant) {
        if self.is_read_only(id) {
            return;
        }
        self.field_mut(id).edit(raw, now);
    }

    /// Commit `id` on loss of focus.
    pub fn blur(&mut self, id: FieldId) -> CommitOutcome {
        if self.is_read_only(id) {
            let field = self.field_mut(id);
            field.discard_edit();
            return CommitOutcome::Reverted {
                value: field.value(),
            };
        }
        let outcome = self.field_mut(id).commit();
        self.after_commit(id);
        outcome
    }

    /// Enter `raw` and commit it immediately.
    pub fn submit_text(&mut self, id: FieldId, raw: &str) -> CommitOutcome {
        self.edit(id, raw, Instant::now());
        self.blur(id)
    }

    /// Commit every field whose idle delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Vec<(FieldId, CommitOutcome)> {
        let mut commits = Vec::new();
        for id in FieldId::ALL {
            if self.is_read_only(id) {
                continue;
            }
            if let Some(outcome) = self.field_mut(id).poll(now) {
                self.after_commit(id);
                commits.push((id, outcome));
            }
        }
        commits
    }

    /// Earliest moment at which [`poll`](Self::poll) will commit something.
    pub fn next_deadline(&self) -> Option<Instant> {
        FieldId::ALL
            .into_iter()
            .filter_map(|id| self.field(id).deadline())
            .min()
    }

    fn after_commit(&mut self, id: FieldId) {
        if id != FieldId::TileWidth {
            return;
        }
        if let Some(height) = self.locked_height() {
            debug!("Tile height derived from width: {height}");
            self.tile_height.set_value(height);
        }
    }

    /// Rewrite tile height when it drifted from the locked ratio. A height
    /// edit still pending from before the lock is dropped either way.
    fn sync_locked_height(&mut self) {
        let Some(height) = self.locked_height() else {
            return;
        };
        if (height - self.tile_height.value()).abs() > ASPECT_SYNC_TOLERANCE_MM {
            debug!("Tile height resynchronized to {height}");
            self.tile_height.set_value(height);
        } else {
            self.tile_height.discard_edit();
        }
    }

    fn locked_height(&self) -> Option<f64> {
        if !self.lock_aspect {
            return None;
        }
        let aspect = self.aspect?;
        Some(round_to(
            aspect.height_for_width(self.tile_width.value().max(MIN_EFFECTIVE_TILE_MM)),
            FIELD_PRECISION,
        ))
    }
}
