use std::path::Path;

use console::Style;
use printtools_core::form::{FieldId, TilingForm};
use printtools_core::i18n::LanguageContext;
use printtools_core::paper::PaperPreset;
use printtools_core::units::format_mm;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    locked: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            locked: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn size(width: f64, height: f64) -> String {
    format!("{} × {} mm", format_mm(width), format_mm(height))
}

pub fn print_layout_summary(ctx: &LanguageContext, form: &TilingForm, image: Option<&Path>) {
    let s = Styles::new();
    let layout = form.layout();
    let title = ctx.t("imageTilingTitle");

    println!();
    println!("  {}", s.title.apply_to(&title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count().max(8))));
    println!();

    if let Some(path) = image {
        println!(
            "  {:<14}{}",
            s.label.apply_to(ctx.t("imageSectionLegend")),
            s.path.apply_to(path.display())
        );
        println!();
    }

    // Paper
    println!("  {}", s.header.apply_to(ctx.t("paperSectionLegend")));
    println!(
        "    {:<12}{}",
        s.label.apply_to(ctx.t("paperSizeLabel")),
        s.value.apply_to(ctx.t(form.preset().label_key()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to(ctx.t("paperOrientationLabel")),
        s.value.apply_to(ctx.t(form.orientation().label_key()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Page"),
        s.value.apply_to(size(layout.page_width_mm, layout.page_height_mm))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Margin"),
        s.value.apply_to(format!("{} mm", format_mm(layout.margin_mm)))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Usable"),
        s.value.apply_to(size(layout.usable_width_mm, layout.usable_height_mm))
    );
    println!();

    // Tiles
    println!("  {}", s.header.apply_to(ctx.t("tileSectionLegend")));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Tile"),
        s.value.apply_to(size(layout.tile_width_mm, layout.tile_height_mm))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Spacing"),
        s.value.apply_to(format!("{} mm", format_mm(layout.spacing_mm)))
    );
    if form.is_read_only(FieldId::TileHeight) {
        if let Some(aspect) = form.image_aspect() {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Aspect"),
                s.locked.apply_to(format!("{:.3} ({})", aspect.ratio(), ctx.t("tileLockAspect")))
            );
        }
    }
    println!();

    let summary = ctx.t_with(
        "tilesSummary",
        &[
            ("columns", layout.columns),
            ("rows", layout.rows),
            ("total", layout.total()),
        ],
    );
    println!("  {}", s.value.apply_to(summary));
    println!();
}

pub fn print_presets(ctx: &LanguageContext, presets: &[PaperPreset]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to(ctx.t("paperSizeLabel")));
    for preset in presets {
        println!(
            "    {:<10}{}",
            s.value.apply_to(preset.id()),
            s.label.apply_to(ctx.t(preset.label_key()))
        );
    }
    println!();
}
