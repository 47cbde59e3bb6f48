use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use printtools_core::consts::DEFAULT_RENDER_DPI;
use printtools_core::i18n::LanguageContext;
use printtools_core::io::image_io::load_source_image;
use printtools_core::render::save_sheet;

use super::sheet::SheetArgs;

#[derive(Args)]
pub struct RenderArgs {
    /// Image to repeat across the sheet
    #[arg(long)]
    pub image: PathBuf,

    /// Output file; `.pdf` writes a PDF, anything else a PNG
    #[arg(short, long, default_value = "sheet.pdf")]
    pub output: PathBuf,

    /// Resolution of PNG output
    #[arg(long, default_value_t = DEFAULT_RENDER_DPI)]
    pub dpi: u32,

    #[command(flatten)]
    pub sheet: SheetArgs,
}

pub fn run(args: &RenderArgs, ctx: &LanguageContext) -> Result<()> {
    let source = load_source_image(&args.image)
        .with_context(|| format!("Failed to load {}", args.image.display()))?;

    let form = args.sheet.build_form(Some(source.aspect))?;
    crate::summary::print_layout_summary(ctx, &form, Some(&args.image));

    let layout = form.layout();
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} Rendering {msg}")?);
    pb.set_message(format!("{} tiles", layout.total()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let format = save_sheet(&layout, &source, &args.output, args.dpi)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    pb.finish_and_clear();

    let path = args.output.display().to_string();
    println!("{} ({format})", ctx.t_with("sheetSaved", &[("path", path)]));

    Ok(())
}
