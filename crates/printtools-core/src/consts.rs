use std::time::Duration;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// CSS reference resolution used for on-screen preview sizing.
pub const CSS_DPI: f64 = 96.0;

/// PostScript points per inch (PDF user space unit).
pub const POINTS_PER_INCH: f64 = 72.0;

/// Idle delay after the last keystroke before a numeric field commits.
pub const INPUT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Decimal places kept for every committed numeric value.
pub const FIELD_PRECISION: u32 = 2;

/// Floor applied to the image aspect ratio before dividing by it.
pub const MIN_ASPECT_RATIO: f64 = 0.01;

/// Smallest tile edge the calculator will lay out, in mm.
pub const MIN_EFFECTIVE_TILE_MM: f64 = 1.0;

/// Locked tile height is only rewritten when it drifts further than this (mm).
pub const ASPECT_SYNC_TOLERANCE_MM: f64 = 0.05;

/// Minimum committed custom paper edge, in mm.
pub const MIN_CUSTOM_PAPER_MM: f64 = 50.0;

/// Minimum committed tile edge, in mm.
pub const MIN_TILE_MM: f64 = 5.0;

pub const DEFAULT_MARGIN_MM: f64 = 10.0;
pub const DEFAULT_TILE_MM: f64 = 50.0;
pub const DEFAULT_SPACING_MM: f64 = 0.0;
pub const DEFAULT_CUSTOM_WIDTH_MM: f64 = 210.0;
pub const DEFAULT_CUSTOM_HEIGHT_MM: f64 = 297.0;

/// Preview never shrinks below this width, in px.
pub const PREVIEW_MIN_WIDTH_PX: f64 = 320.0;

/// Preview never grows beyond this width, in px.
pub const PREVIEW_MAX_WIDTH_PX: f64 = 640.0;

/// Horizontal room reserved around the preview, in px.
pub const PREVIEW_VIEWPORT_PADDING_PX: f64 = 48.0;

/// Default raster resolution for PNG sheets.
pub const DEFAULT_RENDER_DPI: u32 = 300;

/// Upper bound on raster sheet pixels (width * height).
pub const MAX_RENDER_PIXELS: u64 = 400_000_000;

/// Storage key holding the persisted UI language.
pub const LANGUAGE_STORAGE_KEY: &str = "printtools:language";
