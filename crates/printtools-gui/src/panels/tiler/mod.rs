pub(crate) mod image;
mod paper;
mod print;
mod tiles;

const LEFT_PANEL_WIDTH: f32 = 300.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::PrintToolsApp) {
    egui::SidePanel::left("tiler_controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                image::image_section(ui, app);
                ui.separator();
                paper::paper_section(ui, app);
                ui.separator();
                tiles::tile_section(ui, app);
                ui.separator();
                print::print_section(ui, app);
            });
        });
}
