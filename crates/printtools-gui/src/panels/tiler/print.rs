use printtools_core::consts::DEFAULT_RENDER_DPI;

use crate::app::PrintToolsApp;
use crate::messages::WorkerCommand;

pub(super) fn print_section(ui: &mut egui::Ui, app: &mut PrintToolsApp) {
    let ready = app.ui_state.image.is_some() && !app.ui_state.exporting;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        // Printing goes through a PDF at actual size.
        if ui
            .add_enabled(ready, egui::Button::new(app.lang.t("printButton")))
            .clicked()
        {
            export_sheet(app, "PDF", &["pdf"], "tiles.pdf");
        }
        if ui
            .add_enabled(ready, egui::Button::new(app.lang.t("exportPng")))
            .clicked()
        {
            export_sheet(app, "PNG", &["png"], "tiles.png");
        }
    });
}

/// Ask for a destination, then hand the current layout to the worker.
fn export_sheet(
    app: &PrintToolsApp,
    filter: &'static str,
    extensions: &'static [&'static str],
    file_name: &'static str,
) {
    let cmd_tx = app.cmd_tx.clone();
    let layout = app.form.layout();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, extensions)
            .set_file_name(file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportSheet {
                path,
                layout,
                dpi: DEFAULT_RENDER_DPI,
            });
        }
    });
}
