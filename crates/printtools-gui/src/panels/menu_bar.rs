use printtools_core::form::TilingForm;
use printtools_core::route::Page;

use crate::app::PrintToolsApp;
use crate::messages::WorkerCommand;

const REPOSITORY_URL: &str = "https://github.com/kododake/PrintTools";

pub fn show(ctx: &egui::Context, app: &mut PrintToolsApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.strong(app.lang.t("brand"));
            ui.separator();

            for page in [Page::Home, Page::ImageTiler] {
                let Some(key) = page.nav_label_key() else {
                    continue;
                };
                if ui
                    .selectable_label(app.page == page, app.lang.t(key))
                    .clicked()
                {
                    app.navigate(page);
                }
            }

            ui.separator();

            ui.menu_button(app.lang.t("settingsMenu"), |ui| {
                if ui.button(app.lang.t("settingsImport")).clicked() {
                    ui.close();
                    import_settings(app);
                }
                if ui.button(app.lang.t("settingsExport")).clicked() {
                    ui.close();
                    export_settings(app);
                }
                ui.separator();
                if ui.button(app.lang.t("settingsReset")).clicked() {
                    ui.close();
                    app.apply_config(TilingForm::default());
                    app.ui_state.add_log("Settings reset to defaults".into());
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to(app.lang.t("githubLinkLabel"), REPOSITORY_URL)
                    .on_hover_text(app.lang.t("githubLinkAria"));

                let language = app.lang.language();
                if ui
                    .button(language.switch_label())
                    .on_hover_text(app.lang.t("languageSwitchAria"))
                    .clicked()
                {
                    app.pending_language = Some(language.toggled());
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        let open = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            app.navigate(Page::ImageTiler);
            super::tiler::image::open_image(app);
        }
        let quit = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
        if ctx.input_mut(|i| i.consume_shortcut(&quit)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_settings(app: &mut PrintToolsApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ImportSettings { path });
        }
    });
}

fn export_settings(app: &mut PrintToolsApp) {
    let cmd_tx = app.cmd_tx.clone();
    let config = app.form.sheet_config();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("printtools.toml")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportSettings { path, config });
        }
    });
}
