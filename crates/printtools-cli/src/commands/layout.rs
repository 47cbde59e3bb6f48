use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use printtools_core::i18n::LanguageContext;
use printtools_core::io::image_io::load_source_image;

use super::sheet::SheetArgs;

#[derive(Args)]
pub struct LayoutArgs {
    /// Image whose aspect ratio drives the tile height
    #[arg(long)]
    pub image: Option<PathBuf>,

    #[command(flatten)]
    pub sheet: SheetArgs,
}

pub fn run(args: &LayoutArgs, ctx: &LanguageContext) -> Result<()> {
    let aspect = match args.image {
        Some(ref path) => Some(
            load_source_image(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
                .aspect,
        ),
        None => None,
    };

    let form = args.sheet.build_form(aspect)?;
    crate::summary::print_layout_summary(ctx, &form, args.image.as_deref());

    Ok(())
}
