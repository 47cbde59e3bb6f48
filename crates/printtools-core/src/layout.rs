use tracing::debug;

use crate::consts::MIN_EFFECTIVE_TILE_MM;
use crate::paper::PaperConfig;
use crate::tile::{ImageAspect, TileConfig};

/// Grid of tiles on one page. All lengths in mm.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    /// Margin after clamping to half of the shorter page edge.
    pub margin_mm: f64,
    pub usable_width_mm: f64,
    pub usable_height_mm: f64,
    pub tile_width_mm: f64,
    pub tile_height_mm: f64,
    pub spacing_mm: f64,
    pub columns: usize,
    pub rows: usize,
}

impl TileLayout {
    pub fn total(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of every tile, row-major, measured from the page's top-left.
    pub fn tile_origins_mm(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let step_x = self.tile_width_mm + self.spacing_mm;
        let step_y = self.tile_height_mm + self.spacing_mm;
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| {
                (
                    self.margin_mm + col as f64 * step_x,
                    self.margin_mm + row as f64 * step_y,
                )
            })
        })
    }
}

/// Compute the tile grid for a page.
///
/// Degenerate inputs are clamped, never rejected. The margin is capped at half
/// of either page edge and a negative margin counts as zero. Tiles are at
/// least 1 mm and spacing is non-negative. At least one column and one row
/// are always produced, even when the tile does not fit the usable area.
pub fn compute_layout(
    paper: &PaperConfig,
    tile: &TileConfig,
    aspect: Option<ImageAspect>,
) -> TileLayout {
    let (page_width_mm, page_height_mm) = paper.page_size_mm();

    let margin_mm = paper
        .margin_mm
        .max(0.0)
        .min(page_width_mm / 2.0)
        .min(page_height_mm / 2.0);
    let usable_width_mm = (page_width_mm - margin_mm * 2.0).max(0.0);
    let usable_height_mm = (page_height_mm - margin_mm * 2.0).max(0.0);

    let tile_width_mm = tile.width_mm.max(MIN_EFFECTIVE_TILE_MM);
    let tile_height_mm = match aspect {
        Some(aspect) if tile.lock_aspect => aspect.height_for_width(tile_width_mm),
        _ => tile.height_mm.max(MIN_EFFECTIVE_TILE_MM),
    };
    let spacing_mm = tile.spacing_mm.max(0.0);

    let columns = fit_count(usable_width_mm, tile_width_mm, spacing_mm);
    let rows = fit_count(usable_height_mm, tile_height_mm, spacing_mm);

    debug!(
        "Layout {}x{} tiles of {:.2}x{:.2} mm on {}x{} mm page",
        columns, rows, tile_width_mm, tile_height_mm, page_width_mm, page_height_mm
    );

    TileLayout {
        page_width_mm,
        page_height_mm,
        margin_mm,
        usable_width_mm,
        usable_height_mm,
        tile_width_mm,
        tile_height_mm,
        spacing_mm,
        columns,
        rows,
    }
}

/// N tiles of size `tile` with N-1 gaps of `spacing` fit in `usable` when
/// N <= (usable + spacing) / (tile + spacing). Never less than 1.
fn fit_count(usable: f64, tile: f64, spacing: f64) -> usize {
    let n = ((usable + spacing) / (tile + spacing)).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}
