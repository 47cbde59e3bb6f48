use crate::consts::{PREVIEW_MAX_WIDTH_PX, PREVIEW_MIN_WIDTH_PX, PREVIEW_VIEWPORT_PADDING_PX};
use crate::layout::TileLayout;
use crate::units::mm_to_px;

/// On-screen page preview geometry, in CSS-equivalent pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSizing {
    /// Page at 96 DPI, unscaled.
    pub page_width_px: f64,
    pub page_height_px: f64,
    pub preview_width_px: f64,
    pub preview_height_px: f64,
    pub scale: f64,
    pub pixels_per_mm: f64,
    pub margin_px: f64,
    pub tile_width_px: f64,
    pub tile_height_px: f64,
    pub spacing_px: f64,
}

impl PreviewSizing {
    /// Fit the page into a viewport `viewport_width_px` wide, never upscaling.
    pub fn new(layout: &TileLayout, viewport_width_px: f64) -> Self {
        let page_width_px = mm_to_px(layout.page_width_mm);
        let page_height_px = mm_to_px(layout.page_height_mm);

        let viewport_limit = (viewport_width_px - PREVIEW_VIEWPORT_PADDING_PX).max(PREVIEW_MIN_WIDTH_PX);
        let max_width_px = PREVIEW_MAX_WIDTH_PX.min(viewport_limit);
        let base_width_px = page_width_px.max(1.0);
        let preview_width_px = base_width_px.min(max_width_px);
        let scale = preview_width_px / base_width_px;
        let pixels_per_mm = mm_to_px(1.0) * scale;

        Self {
            page_width_px,
            page_height_px,
            preview_width_px,
            preview_height_px: page_height_px * scale,
            scale,
            pixels_per_mm,
            margin_px: pixels_per_mm * layout.margin_mm,
            tile_width_px: pixels_per_mm * layout.tile_width_mm,
            tile_height_px: pixels_per_mm * layout.tile_height_mm,
            spacing_px: pixels_per_mm * layout.spacing_mm,
        }
    }
}
