use printtools_core::route::Page;

use crate::app::PrintToolsApp;

pub fn show(ctx: &egui::Context, app: &mut PrintToolsApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.heading(app.lang.t("notFoundTitle"));
            ui.add_space(8.0);
            ui.label(app.lang.t("notFoundMessage"));
            ui.add_space(16.0);
            if ui.link(app.lang.t("notFoundBackHome")).clicked() {
                app.navigate(Page::Home);
            }
        });
    });
}
