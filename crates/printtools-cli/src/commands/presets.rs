use anyhow::Result;
use printtools_core::i18n::LanguageContext;
use printtools_core::paper::PaperPreset;

pub fn run(ctx: &LanguageContext) -> Result<()> {
    crate::summary::print_presets(ctx, &PaperPreset::ALL);
    Ok(())
}
