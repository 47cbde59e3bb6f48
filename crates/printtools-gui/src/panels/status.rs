use printtools_core::units::format_mm;

use crate::app::PrintToolsApp;

pub fn show(ctx: &egui::Context, app: &mut PrintToolsApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.page.path());
            ui.separator();
            let layout = app.form.layout();
            ui.label(format!(
                "{} × {} mm",
                format_mm(layout.page_width_mm),
                format_mm(layout.page_height_mm)
            ));
            ui.separator();
            ui.label(app.lang.language().code());
            if app.is_loading() || app.ui_state.exporting {
                ui.separator();
                ui.spinner();
            }
        });

        ui.add_space(2.0);
    });
}
