use printtools_core::route::Page;

use crate::app::PrintToolsApp;

pub fn show(ctx: &egui::Context, app: &mut PrintToolsApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(app.lang.t("homeTitle"));
        });
        ui.add_space(12.0);

        for key in ["homeIntro1", "homeIntro2", "homeIntro3"] {
            ui.label(app.lang.t(key));
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        if ui.button(app.lang.t("navImageTiler")).clicked() {
            app.navigate(Page::ImageTiler);
        }
    });
}
