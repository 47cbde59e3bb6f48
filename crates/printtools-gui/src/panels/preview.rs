use printtools_core::i18n::LanguageContext;
use printtools_core::layout::TileLayout;
use printtools_core::preview::PreviewSizing;

use crate::app::PrintToolsApp;

pub fn show(ctx: &egui::Context, app: &mut PrintToolsApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading(app.lang.t("imageTilingTitle"));
            ui.label(app.lang.t("imageTilingLede"));
            ui.small(app.lang.t("localProcessingNotice"));
            ui.add_space(8.0);

            let layout = app.form.layout();
            ui.strong(app.lang.t_with(
                "tilesSummary",
                &[
                    ("columns", layout.columns),
                    ("rows", layout.rows),
                    ("total", layout.total()),
                ],
            ));
            ui.add_space(8.0);

            // Recomputed every frame, so window resizes are picked up.
            let sizing = PreviewSizing::new(&layout, ui.available_width() as f64);
            let texture = app.ui_state.image.as_ref().map(|image| image.texture.id());
            ui.vertical_centered(|ui| {
                draw_page(ui, &layout, &sizing, texture, &app.lang);
            });

            ui.add_space(12.0);
            super::tips::tips_section(ui, &app.lang);
        });
    });
}

fn draw_page(
    ui: &mut egui::Ui,
    layout: &TileLayout,
    sizing: &PreviewSizing,
    texture: Option<egui::TextureId>,
    lang: &LanguageContext,
) {
    let size = egui::vec2(
        sizing.preview_width_px as f32,
        sizing.preview_height_px as f32,
    );
    let (page_rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    response.on_hover_text(lang.t("previewAriaLabel"));

    // Tiles past the page edge are clipped like on paper.
    let painter = ui.painter_at(page_rect);
    painter.rect_filled(page_rect, 0.0, egui::Color32::WHITE);

    let ppm = sizing.pixels_per_mm as f32;
    let margin = sizing.margin_px as f32;
    let usable = egui::Rect::from_min_size(
        page_rect.min + egui::vec2(margin, margin),
        egui::vec2(
            layout.usable_width_mm as f32 * ppm,
            layout.usable_height_mm as f32 * ppm,
        ),
    );
    painter.rect_stroke(
        usable,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(220)),
        egui::StrokeKind::Inside,
    );

    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    let tile_size = egui::vec2(sizing.tile_width_px as f32, sizing.tile_height_px as f32);
    for (x_mm, y_mm) in layout.tile_origins_mm() {
        let min = page_rect.min + egui::vec2(x_mm as f32 * ppm, y_mm as f32 * ppm);
        let rect = egui::Rect::from_min_size(min, tile_size);
        match texture {
            Some(id) => {
                painter.image(id, rect, uv, egui::Color32::WHITE);
            }
            None => {
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    if texture.is_none() {
        painter.text(
            page_rect.center(),
            egui::Align2::CENTER_CENTER,
            lang.t("previewPlaceholder"),
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(120),
        );
    }

    ui.painter().rect_stroke(
        page_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
        egui::StrokeKind::Outside,
    );
}
