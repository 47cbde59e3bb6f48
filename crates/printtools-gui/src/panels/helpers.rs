use std::time::Instant;

use printtools_core::form::{FieldId, TilingForm};
use printtools_core::i18n::LanguageContext;
use tracing::debug;

const FIELD_WIDTH: f32 = 72.0;

/// Show a ComboBox over a fixed set of choices. Returns `true` if the value changed.
pub(crate) fn choice_combo<T: PartialEq + Copy>(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: &mut T,
    options: &[T],
    text: impl Fn(T) -> String,
) -> bool {
    let resp = egui::ComboBox::from_id_salt(id_salt)
        .selected_text(text(*current))
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui.selectable_value(current, choice, text(choice)).changed() {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Text input bound to one form field. Keystrokes go to the form's
/// debounce, focus loss commits right away.
pub(crate) fn numeric_input(
    ui: &mut egui::Ui,
    form: &mut TilingForm,
    lang: &LanguageContext,
    id: FieldId,
) {
    let read_only = form.is_read_only(id);
    let mut text = form.field(id).raw().to_string();

    ui.label(lang.t(id.label_key()));
    let response = ui.add_enabled(
        !read_only,
        egui::TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH),
    );
    if response.changed() {
        form.edit(id, text, Instant::now());
    }
    if response.lost_focus() {
        let outcome = form.blur(id);
        debug!("Blur commit of {id}: {outcome:?}");
    }
    ui.end_row();
}
