use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{PrintToolsError, Result};
use crate::tile::ImageAspect;

/// A decoded source image together with its aspect ratio.
///
/// Both are produced by the same decode so they always describe the same file.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub pixels: RgbaImage,
    pub aspect: ImageAspect,
}

impl SourceImage {
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        let aspect = ImageAspect::from_dimensions(width, height)
            .ok_or(PrintToolsError::InvalidDimensions { width, height })?;
        Ok(Self { pixels, aspect })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode any format supported by the `image` crate.
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    let source = SourceImage::from_rgba(img.to_rgba8())?;
    info!(
        "Loaded {} ({}x{}, aspect {:.3})",
        path.display(),
        source.width(),
        source.height(),
        source.aspect.ratio()
    );
    Ok(source)
}

/// Decode an in-memory image, guessing the format from its contents.
pub fn decode_source_image(bytes: &[u8]) -> Result<SourceImage> {
    let img = image::load_from_memory(bytes)?;
    SourceImage::from_rgba(img.to_rgba8())
}
