//! Print-ready output of a tiled sheet.
//!
//! Tiles are placed row-major from the top-left corner of the usable area and
//! the source image is scaled to fill each tile. Anything past the page edge
//! is clipped.

pub mod pdf;
pub mod raster;

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::image_io::SourceImage;
use crate::layout::TileLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetFormat {
    Png,
    Pdf,
}

impl SheetFormat {
    /// `.pdf` (any case) selects PDF; everything else is written as PNG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("pdf") => SheetFormat::Pdf,
            _ => SheetFormat::Png,
        }
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetFormat::Png => write!(f, "PNG"),
            SheetFormat::Pdf => write!(f, "PDF"),
        }
    }
}

/// Write the sheet to `path`, choosing the format from its extension.
/// `dpi` only affects PNG output.
pub fn save_sheet(
    layout: &TileLayout,
    source: &SourceImage,
    path: &Path,
    dpi: u32,
) -> Result<SheetFormat> {
    let format = SheetFormat::from_path(path);
    match format {
        SheetFormat::Pdf => pdf::write_sheet_pdf(layout, source, path)?,
        SheetFormat::Png => raster::save_sheet_png(layout, source, dpi, path)?,
    }
    info!(
        "Saved {} sheet with {} tiles to {}",
        format,
        layout.total(),
        path.display()
    );
    Ok(format)
}
