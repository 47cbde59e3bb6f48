use crate::consts::{CSS_DPI, MM_PER_INCH, POINTS_PER_INCH};

/// Millimetres to CSS pixels (96 DPI).
pub fn mm_to_px(mm: f64) -> f64 {
    mm_to_dots(mm, CSS_DPI)
}

/// Millimetres to device dots at an arbitrary resolution.
pub fn mm_to_dots(mm: f64, dpi: f64) -> f64 {
    mm / MM_PER_INCH * dpi
}

/// Millimetres to PDF points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm_to_dots(mm, POINTS_PER_INCH)
}

/// Round half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Format a millimetre value without trailing zeros (`50`, `12.5`, `215.9`).
pub fn format_mm(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
