use image::imageops::FilterType;
use printtools_core::io::image_io::SourceImage;

/// Longest texture edge uploaded for the on-screen preview.
pub const MAX_PREVIEW_EDGE: u32 = 1024;

/// Convert a decoded image to an egui ColorImage, downscaling large sources.
pub fn source_to_color_image(source: &SourceImage, max_edge: u32) -> egui::ColorImage {
    let (w, h) = source.pixels.dimensions();
    let longest = w.max(h);

    if longest <= max_edge {
        return egui::ColorImage::from_rgba_unmultiplied(
            [w as usize, h as usize],
            source.pixels.as_raw(),
        );
    }

    let scale = max_edge as f64 / longest as f64;
    let tw = ((w as f64 * scale).round() as u32).max(1);
    let th = ((h as f64 * scale).round() as u32).max(1);
    let small = image::imageops::resize(&source.pixels, tw, th, FilterType::Triangle);
    egui::ColorImage::from_rgba_unmultiplied([tw as usize, th as usize], small.as_raw())
}
