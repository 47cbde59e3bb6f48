use printtools_core::form::FieldId;
use printtools_core::paper::{Orientation, PaperPreset};

use crate::app::PrintToolsApp;
use crate::panels::helpers::{choice_combo, numeric_input, section_header};

pub(super) fn paper_section(ui: &mut egui::Ui, app: &mut PrintToolsApp) {
    section_header(ui, &app.lang.t("paperSectionLegend"), None);
    ui.add_space(4.0);

    let lang = &app.lang;
    let form = &mut app.form;

    egui::Grid::new("paper_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(lang.t("paperSizeLabel"));
            let mut preset = form.preset();
            if choice_combo(ui, "paper_preset", &mut preset, &PaperPreset::ALL, |p| {
                lang.t(p.label_key())
            }) {
                form.set_preset(preset);
            }
            ui.end_row();

            if form.preset() == PaperPreset::Custom {
                numeric_input(ui, form, lang, FieldId::CustomWidth);
                numeric_input(ui, form, lang, FieldId::CustomHeight);
            }

            ui.label(lang.t("paperOrientationLabel"));
            ui.horizontal(|ui| {
                let mut orientation = form.orientation();
                for choice in [Orientation::Portrait, Orientation::Landscape] {
                    if ui
                        .radio_value(&mut orientation, choice, lang.t(choice.label_key()))
                        .changed()
                    {
                        form.set_orientation(orientation);
                    }
                }
            });
            ui.end_row();

            numeric_input(ui, form, lang, FieldId::Margin);
        });
}
