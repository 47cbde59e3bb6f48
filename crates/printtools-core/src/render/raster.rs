use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::consts::MAX_RENDER_PIXELS;
use crate::error::{PrintToolsError, Result};
use crate::io::image_io::SourceImage;
use crate::layout::TileLayout;
use crate::units::mm_to_dots;

/// Render the sheet as an RGBA raster at `dpi` on a white page.
pub fn render_sheet(layout: &TileLayout, source: &SourceImage, dpi: u32) -> Result<RgbaImage> {
    let dpi = dpi.max(1) as f64;

    let (page_w, page_h) = checked_size(
        mm_to_dots(layout.page_width_mm, dpi).round(),
        mm_to_dots(layout.page_height_mm, dpi).round(),
    )?;
    // Ceil so neighbouring tiles with zero spacing never leave a hairline gap.
    let (tile_w, tile_h) = checked_size(
        mm_to_dots(layout.tile_width_mm, dpi).ceil(),
        mm_to_dots(layout.tile_height_mm, dpi).ceil(),
    )?;

    debug!("Rendering {page_w}x{page_h} px sheet, tile {tile_w}x{tile_h} px");

    let mut sheet = RgbaImage::from_pixel(page_w, page_h, Rgba([255, 255, 255, 255]));
    let tile = imageops::resize(&source.pixels, tile_w, tile_h, FilterType::Triangle);

    for (x_mm, y_mm) in layout.tile_origins_mm() {
        let x = mm_to_dots(x_mm, dpi).round() as i64;
        let y = mm_to_dots(y_mm, dpi).round() as i64;
        imageops::overlay(&mut sheet, &tile, x, y);
    }

    Ok(sheet)
}

pub fn save_sheet_png(
    layout: &TileLayout,
    source: &SourceImage,
    dpi: u32,
    path: &Path,
) -> Result<()> {
    let sheet = render_sheet(layout, source, dpi)?;
    sheet.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn checked_size(width: f64, height: f64) -> Result<(u32, u32)> {
    let width = width.max(1.0) as u64;
    let height = height.max(1.0) as u64;
    if width.saturating_mul(height) > MAX_RENDER_PIXELS
        || width > u32::MAX as u64
        || height > u32::MAX as u64
    {
        return Err(PrintToolsError::SheetTooLarge { width, height });
    }
    Ok((width as u32, height as u32))
}
