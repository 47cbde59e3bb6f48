use crate::app::PrintToolsApp;
use crate::messages::WorkerCommand;
use crate::panels::helpers::section_header;

pub(in crate::panels) fn image_section(ui: &mut egui::Ui, app: &mut PrintToolsApp) {
    let status = app
        .form
        .image_aspect()
        .map(|aspect| format!("{:.3}:1", aspect.ratio()));
    section_header(ui, &app.lang.t("imageSectionLegend"), status.as_deref());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button(app.lang.t("imageChooseFile")).clicked() {
            open_image(app);
        }
        if app.is_loading() {
            ui.spinner();
        }
    });

    match app.ui_state.image {
        Some(ref image) => {
            ui.label(image.file_name());
            ui.small(format!("{}x{}", image.width, image.height));
            ui.small(app.lang.t("imageLoaded"));
        }
        None => {
            ui.small(app.lang.t("imagePending"));
        }
    }
}

/// Pick an image on a dialog thread. The ticket is taken when the user
/// confirms, so a slower earlier load can never overwrite this one.
pub(in crate::panels) fn open_image(app: &PrintToolsApp) {
    let cmd_tx = app.cmd_tx.clone();
    let tickets = app.tickets.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let ticket = tickets.issue();
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path, ticket });
        }
    });
}
