use std::time::{Duration, Instant};

use approx::assert_relative_eq;

use printtools_core::field::{CommitOutcome, FieldSpec, NumericField};
use printtools_core::form::{FieldId, TilingForm};
use printtools_core::paper::{Orientation, PaperPreset};
use printtools_core::tile::ImageAspect;

const IDLE: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_form_defaults() {
    let form = TilingForm::default();
    assert_eq!(form.preset(), PaperPreset::A4);
    assert_eq!(form.orientation(), Orientation::Portrait);
    assert!(form.lock_aspect());
    assert!(form.image_aspect().is_none());
    assert_eq!(form.field(FieldId::Margin).value(), 10.0);
    assert_eq!(form.field(FieldId::Margin).raw(), "10");
    assert_eq!(form.field(FieldId::TileWidth).value(), 50.0);
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
    assert_eq!(form.field(FieldId::Spacing).raw(), "0");
    assert_eq!(form.layout().total(), 15);
}

// ---------------------------------------------------------------------------
// Blur / idle commit
// ---------------------------------------------------------------------------

#[test]
fn test_blur_and_idle_commit_are_identical() {
    let start = Instant::now();

    let mut blurred = TilingForm::default();
    blurred.edit(FieldId::TileWidth, "75", start);
    let by_blur = blurred.blur(FieldId::TileWidth);

    let mut waited = TilingForm::default();
    waited.edit(FieldId::TileWidth, "75", start);
    let commits = waited.poll(start + IDLE);

    assert_eq!(commits, vec![(FieldId::TileWidth, by_blur)]);
    assert_eq!(by_blur, CommitOutcome::Valid { value: 75.0, changed: true });
    for form in [&blurred, &waited] {
        let field = form.field(FieldId::TileWidth);
        assert_eq!(field.value(), 75.0);
        assert_eq!(field.raw(), "75");
        assert!(!field.is_editing());
    }
}

#[test]
fn test_keystrokes_restart_idle_timer() {
    let start = Instant::now();
    let mut field = NumericField::new(FieldSpec::clamped(0.0), 10.0);

    field.edit("7", start);
    field.edit("75", start + Duration::from_millis(600));
    assert!(field.poll(start + IDLE).is_none());
    assert_eq!(field.value(), 10.0);
    assert_eq!(field.raw(), "75");

    let outcome = field.poll(start + Duration::from_millis(1600));
    assert_eq!(outcome, Some(CommitOutcome::Valid { value: 75.0, changed: true }));
    assert!(field.poll(start + Duration::from_millis(5000)).is_none());
}

#[test]
fn test_fields_debounce_independently() {
    let start = Instant::now();
    let mut form = TilingForm::default();
    form.edit(FieldId::Margin, "5", start);
    form.edit(FieldId::Spacing, "2", start + Duration::from_millis(500));

    assert_eq!(form.next_deadline(), Some(start + IDLE));

    let first = form.poll(start + IDLE);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].0, FieldId::Margin);
    assert_eq!(form.next_deadline(), Some(start + Duration::from_millis(1500)));

    let second = form.poll(start + Duration::from_millis(1500));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].0, FieldId::Spacing);
    assert_eq!(form.next_deadline(), None);
    assert_eq!(form.field(FieldId::Spacing).value(), 2.0);
}

#[test]
fn test_invalid_entry_reverts() {
    let mut form = TilingForm::default();
    for raw in ["", "   ", "abc", "1e999"] {
        let outcome = form.submit_text(FieldId::Margin, raw);
        assert_eq!(outcome, CommitOutcome::Reverted { value: 10.0 });
        assert_eq!(form.field(FieldId::Margin).raw(), "10");
    }
}

#[test]
fn test_value_is_rounded_and_raw_normalized() {
    let mut form = TilingForm::default();
    form.submit_text(FieldId::Margin, "12.346");
    assert_eq!(form.field(FieldId::Margin).value(), 12.35);
    assert_eq!(form.field(FieldId::Margin).raw(), "12.35");

    form.submit_text(FieldId::Spacing, "007");
    assert_eq!(form.field(FieldId::Spacing).raw(), "7");
}

#[test]
fn test_tile_width_clamped_to_minimum() {
    let mut form = TilingForm::default();
    let outcome = form.submit_text(FieldId::TileWidth, "2");
    assert_eq!(outcome, CommitOutcome::Valid { value: 5.0, changed: true });
    assert_eq!(form.field(FieldId::TileWidth).raw(), "5");
}

#[test]
fn test_unchanged_commit_reports_no_change() {
    let mut form = TilingForm::default();
    let outcome = form.submit_text(FieldId::TileWidth, "50.00");
    assert!(!outcome.changed());
    assert_eq!(form.field(FieldId::TileWidth).raw(), "50");
}

#[test]
fn test_custom_width_below_minimum_reverts() {
    let mut form = TilingForm::default();
    form.set_preset(PaperPreset::Custom);
    let outcome = form.submit_text(FieldId::CustomWidth, "10");
    assert_eq!(outcome, CommitOutcome::Reverted { value: 210.0 });
    assert_eq!(form.field(FieldId::CustomWidth).raw(), "210");
    assert_relative_eq!(form.layout().page_width_mm, 210.0);

    form.submit_text(FieldId::CustomWidth, "300");
    assert_relative_eq!(form.layout().page_width_mm, 300.0);
    let outcome = form.submit_text(FieldId::CustomWidth, "49.99");
    assert_eq!(outcome, CommitOutcome::Reverted { value: 300.0 });
}

#[test]
fn test_custom_height_reverts_through_idle_path_too() {
    let start = Instant::now();
    let mut form = TilingForm::default();
    form.edit(FieldId::CustomHeight, "10", start);
    let commits = form.poll(start + IDLE);
    assert_eq!(
        commits,
        vec![(FieldId::CustomHeight, CommitOutcome::Reverted { value: 297.0 })]
    );
}

// ---------------------------------------------------------------------------
// Aspect lock coupling
// ---------------------------------------------------------------------------

#[test]
fn test_width_commit_derives_height() {
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(2.0));
    assert_eq!(form.field(FieldId::TileHeight).value(), 25.0);

    form.submit_text(FieldId::TileWidth, "100");
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
    assert_eq!(form.field(FieldId::TileHeight).raw(), "50");

    form.submit_text(FieldId::TileWidth, "150");
    assert_eq!(form.field(FieldId::TileHeight).value(), 75.0);
    assert_relative_eq!(form.layout().tile_height_mm, 75.0);
}

#[test]
fn test_derived_height_rounded_to_two_decimals() {
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(3.0));
    form.submit_text(FieldId::TileWidth, "100");
    assert_eq!(form.field(FieldId::TileHeight).value(), 33.33);
    assert_eq!(form.field(FieldId::TileHeight).raw(), "33.33");
}

#[test]
fn test_idle_width_commit_derives_height() {
    let start = Instant::now();
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(2.0));
    form.edit(FieldId::TileWidth, "120", start);
    form.poll(start + IDLE);
    assert_eq!(form.field(FieldId::TileHeight).value(), 60.0);
}

#[test]
fn test_locked_height_is_read_only() {
    let start = Instant::now();
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(2.0));
    assert!(form.is_read_only(FieldId::TileHeight));

    form.edit(FieldId::TileHeight, "99", start);
    assert_eq!(form.field(FieldId::TileHeight).raw(), "25");
    assert!(form.next_deadline().is_none());

    let outcome = form.blur(FieldId::TileHeight);
    assert_eq!(outcome, CommitOutcome::Reverted { value: 25.0 });
}

#[test]
fn test_pending_height_edit_dropped_when_lock_engages() {
    let start = Instant::now();
    let mut form = TilingForm::default();
    form.set_lock_aspect(false);
    form.set_image_aspect(ImageAspect::new(1.0));

    // Height already matches the ratio, so locking needs no resync.
    form.edit(FieldId::TileHeight, "80", start);
    form.set_lock_aspect(true);
    assert_eq!(form.field(FieldId::TileHeight).raw(), "50");
    assert!(form.next_deadline().is_none());

    let commits = form.poll(start + IDLE);
    assert!(commits.is_empty());
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
    assert_eq!(form.sheet_config().tile.height_mm, 50.0);
    assert_relative_eq!(form.layout().tile_height_mm, 50.0);
}

#[test]
fn test_pending_height_edit_dropped_when_image_arrives() {
    let start = Instant::now();
    let mut form = TilingForm::default();

    form.edit(FieldId::TileHeight, "80", start);
    form.set_image_aspect(ImageAspect::new(1.0));
    assert!(form.poll(start + IDLE).is_empty());
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
    assert_eq!(form.field(FieldId::TileHeight).raw(), "50");
}

#[test]
fn test_lock_without_image_is_honored_lazily() {
    let mut form = TilingForm::default();
    form.set_lock_aspect(false);
    form.set_lock_aspect(true);
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
    assert!(!form.is_read_only(FieldId::TileHeight));

    form.set_image_aspect(ImageAspect::new(2.0));
    assert_eq!(form.field(FieldId::TileHeight).value(), 25.0);
    assert!(form.is_read_only(FieldId::TileHeight));
}

#[test]
fn test_unlock_keeps_last_height() {
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(2.0));
    form.set_lock_aspect(false);
    assert_eq!(form.field(FieldId::TileHeight).value(), 25.0);
    assert!(!form.is_read_only(FieldId::TileHeight));

    form.submit_text(FieldId::TileHeight, "40");
    assert_eq!(form.field(FieldId::TileHeight).value(), 40.0);
    assert_relative_eq!(form.layout().tile_height_mm, 40.0);

    form.submit_text(FieldId::TileWidth, "80");
    assert_eq!(form.field(FieldId::TileHeight).value(), 40.0);
}

#[test]
fn test_relock_resynchronizes_height() {
    let mut form = TilingForm::default();
    form.set_image_aspect(ImageAspect::new(2.0));
    form.set_lock_aspect(false);
    form.submit_text(FieldId::TileHeight, "40");
    form.set_lock_aspect(true);
    assert_eq!(form.field(FieldId::TileHeight).value(), 25.0);
}

#[test]
fn test_small_drift_within_tolerance_is_kept() {
    let mut form = TilingForm::default();
    // Derived height 50.03 is within 0.05 mm of the current 50.
    form.set_image_aspect(ImageAspect::new(50.0 / 50.03));
    assert_eq!(form.field(FieldId::TileHeight).value(), 50.0);
}

#[test]
fn test_sheet_config_reflects_committed_values() {
    let mut form = TilingForm::default();
    form.set_preset(PaperPreset::Letter);
    form.set_orientation(Orientation::Landscape);
    form.submit_text(FieldId::Spacing, "3");
    let config = form.sheet_config();
    assert_eq!(config.paper.preset, PaperPreset::Letter);
    assert_eq!(config.paper.orientation, Orientation::Landscape);
    assert_eq!(config.tile.spacing_mm, 3.0);

    let rebuilt = TilingForm::from_config(&config);
    assert_eq!(rebuilt.sheet_config(), config);
}
