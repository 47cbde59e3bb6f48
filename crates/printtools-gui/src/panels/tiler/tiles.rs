use printtools_core::form::FieldId;

use crate::app::PrintToolsApp;
use crate::panels::helpers::{numeric_input, section_header};

pub(super) fn tile_section(ui: &mut egui::Ui, app: &mut PrintToolsApp) {
    section_header(ui, &app.lang.t("tileSectionLegend"), None);
    ui.add_space(4.0);

    let lang = &app.lang;
    let form = &mut app.form;

    egui::Grid::new("tile_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            numeric_input(ui, form, lang, FieldId::TileWidth);
            numeric_input(ui, form, lang, FieldId::TileHeight);
            numeric_input(ui, form, lang, FieldId::Spacing);
        });

    // Nothing to lock to until an image is loaded.
    let mut lock = form.lock_aspect();
    let has_aspect = form.image_aspect().is_some();
    if ui
        .add_enabled(has_aspect, egui::Checkbox::new(&mut lock, lang.t("tileLockAspect")))
        .changed()
    {
        form.set_lock_aspect(lock);
    }
}
