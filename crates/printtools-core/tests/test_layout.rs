use approx::assert_relative_eq;

use printtools_core::layout::compute_layout;
use printtools_core::paper::{Orientation, PaperConfig, PaperPreset};
use printtools_core::tile::{ImageAspect, TileConfig};

fn a4() -> PaperConfig {
    PaperConfig::default()
}

fn tiles(width_mm: f64, height_mm: f64, spacing_mm: f64) -> TileConfig {
    TileConfig {
        width_mm,
        height_mm,
        spacing_mm,
        lock_aspect: true,
    }
}

// ---------------------------------------------------------------------------
// Grid size
// ---------------------------------------------------------------------------

#[test]
fn test_default_a4_grid() {
    let layout = compute_layout(&a4(), &TileConfig::default(), None);
    assert_relative_eq!(layout.usable_width_mm, 190.0);
    assert_relative_eq!(layout.usable_height_mm, 277.0);
    assert_eq!(layout.columns, 3);
    assert_eq!(layout.rows, 5);
    assert_eq!(layout.total(), 15);
}

#[test]
fn test_spacing_accounts_for_one_fewer_gap() {
    // floor((190 + 5) / (50 + 5)) = 3
    let layout = compute_layout(&a4(), &tiles(50.0, 50.0, 5.0), None);
    assert_eq!(layout.columns, 3);
    // floor((277 + 5) / (50 + 5)) = 5
    assert_eq!(layout.rows, 5);
}

#[test]
fn test_exact_fit_with_spacing() {
    // 4 tiles of 40 mm and 3 gaps of 10 mm fill exactly 190 mm.
    let layout = compute_layout(&a4(), &tiles(40.0, 40.0, 10.0), None);
    assert_eq!(layout.columns, 4);
}

#[test]
fn test_tile_larger_than_page_still_shows_one() {
    let layout = compute_layout(&a4(), &tiles(1000.0, 1000.0, 0.0), None);
    assert_eq!(layout.columns, 1);
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.total(), 1);
}

#[test]
fn test_degenerate_tile_and_spacing_are_clamped() {
    let layout = compute_layout(&a4(), &tiles(0.0, -3.0, -5.0), None);
    assert_relative_eq!(layout.tile_width_mm, 1.0);
    assert_relative_eq!(layout.tile_height_mm, 1.0);
    assert_relative_eq!(layout.spacing_mm, 0.0);
    assert_eq!(layout.columns, 190);
    assert_eq!(layout.rows, 277);
}

#[test]
fn test_grid_never_empty() {
    let margins = [0.0, 10.0, 105.0, 500.0];
    let sizes = [1.0, 5.0, 50.0, 300.0, 5000.0];
    let spacings = [0.0, 2.5, 100.0];
    for preset in PaperPreset::ALL {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            for &margin_mm in &margins {
                for &size in &sizes {
                    for &spacing in &spacings {
                        let paper = PaperConfig {
                            preset,
                            orientation,
                            margin_mm,
                            ..PaperConfig::default()
                        };
                        let layout = compute_layout(&paper, &tiles(size, size, spacing), None);
                        assert!(layout.columns >= 1);
                        assert!(layout.rows >= 1);
                        let half_short = layout.page_width_mm.min(layout.page_height_mm) / 2.0;
                        assert!(layout.margin_mm <= half_short);
                        assert!(layout.usable_width_mm >= 0.0);
                        assert!(layout.usable_height_mm >= 0.0);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Paper and margin
// ---------------------------------------------------------------------------

#[test]
fn test_landscape_swaps_page() {
    let paper = PaperConfig {
        orientation: Orientation::Landscape,
        ..a4()
    };
    let layout = compute_layout(&paper, &TileConfig::default(), None);
    assert_relative_eq!(layout.page_width_mm, 297.0);
    assert_relative_eq!(layout.page_height_mm, 210.0);
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 3);
}

#[test]
fn test_margin_clamped_to_half_page() {
    let paper = PaperConfig {
        margin_mm: 500.0,
        ..a4()
    };
    let layout = compute_layout(&paper, &TileConfig::default(), None);
    assert_relative_eq!(layout.margin_mm, 105.0);
    assert_relative_eq!(layout.usable_width_mm, 0.0);
    assert_relative_eq!(layout.usable_height_mm, 87.0);
    assert_eq!(layout.columns, 1);
    assert_eq!(layout.rows, 1);
}

#[test]
fn test_negative_margin_treated_as_zero() {
    let paper = PaperConfig {
        margin_mm: -20.0,
        ..a4()
    };
    let layout = compute_layout(&paper, &TileConfig::default(), None);
    assert_relative_eq!(layout.margin_mm, 0.0);
    assert_relative_eq!(layout.usable_width_mm, 210.0);
    assert_relative_eq!(layout.usable_height_mm, 297.0);
    assert_eq!(layout.columns, 4);
    assert_eq!(layout.rows, 5);
}

#[test]
fn test_custom_paper_uses_custom_size() {
    let paper = PaperConfig {
        preset: PaperPreset::Custom,
        custom_width_mm: 100.0,
        custom_height_mm: 150.0,
        margin_mm: 0.0,
        ..a4()
    };
    let layout = compute_layout(&paper, &TileConfig::default(), None);
    assert_relative_eq!(layout.page_width_mm, 100.0);
    assert_relative_eq!(layout.page_height_mm, 150.0);
    assert_eq!(layout.columns, 2);
    assert_eq!(layout.rows, 3);
}

#[test]
fn test_custom_size_ignored_for_presets() {
    let paper = PaperConfig {
        preset: PaperPreset::Letter,
        custom_width_mm: 100.0,
        custom_height_mm: 150.0,
        ..a4()
    };
    let layout = compute_layout(&paper, &TileConfig::default(), None);
    assert_relative_eq!(layout.page_width_mm, 215.9);
    assert_relative_eq!(layout.page_height_mm, 279.4);
}

// ---------------------------------------------------------------------------
// Aspect lock
// ---------------------------------------------------------------------------

#[test]
fn test_locked_height_follows_aspect() {
    let aspect = ImageAspect::new(2.0);
    let layout = compute_layout(&a4(), &tiles(100.0, 10.0, 0.0), aspect);
    assert_relative_eq!(layout.tile_height_mm, 50.0);

    let layout = compute_layout(&a4(), &tiles(150.0, 10.0, 0.0), aspect);
    assert_relative_eq!(layout.tile_height_mm, 75.0);
}

#[test]
fn test_unlocked_height_is_independent() {
    let tile = TileConfig {
        lock_aspect: false,
        ..tiles(100.0, 10.0, 0.0)
    };
    let layout = compute_layout(&a4(), &tile, ImageAspect::new(2.0));
    assert_relative_eq!(layout.tile_height_mm, 10.0);
}

#[test]
fn test_lock_without_image_uses_height() {
    let layout = compute_layout(&a4(), &tiles(100.0, 10.0, 0.0), None);
    assert_relative_eq!(layout.tile_height_mm, 10.0);
}

#[test]
fn test_tiny_aspect_is_floored() {
    let layout = compute_layout(&a4(), &tiles(50.0, 50.0, 0.0), ImageAspect::new(0.001));
    assert_relative_eq!(layout.tile_height_mm, 5000.0, epsilon = 1e-9);
    assert_eq!(layout.rows, 1);
}

#[test]
fn test_image_aspect_rejects_degenerate() {
    assert!(ImageAspect::from_dimensions(0, 10).is_none());
    assert!(ImageAspect::from_dimensions(10, 0).is_none());
    assert!(ImageAspect::new(0.0).is_none());
    assert!(ImageAspect::new(f64::NAN).is_none());
    assert_relative_eq!(ImageAspect::from_dimensions(400, 200).unwrap().ratio(), 2.0);
}

// ---------------------------------------------------------------------------
// Tile placement
// ---------------------------------------------------------------------------

#[test]
fn test_tile_origins_row_major() {
    let layout = compute_layout(&a4(), &tiles(50.0, 50.0, 5.0), None);
    let origins: Vec<(f64, f64)> = layout.tile_origins_mm().collect();
    assert_eq!(origins.len(), layout.total());
    assert_eq!(origins[0], (10.0, 10.0));
    assert_eq!(origins[1], (65.0, 10.0));
    assert_eq!(origins[3], (10.0, 65.0));
    let last = origins[origins.len() - 1];
    assert_relative_eq!(last.0, 120.0);
    assert_relative_eq!(last.1, 230.0);
}
