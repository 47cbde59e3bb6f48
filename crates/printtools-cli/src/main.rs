mod commands;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use printtools_core::i18n::{preferred_languages_from_env, Language, LanguageContext};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "printtools", about = "Tile an image across a printable sheet")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output language (en or ja); defaults to the system locale
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the tile grid for a sheet
    Layout(commands::layout::LayoutArgs),
    /// Render a tiled sheet to PNG or PDF
    Render(commands::render::RenderArgs),
    /// List the available paper sizes
    Presets,
    /// Print or save a default sheet config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ctx = match cli.lang.as_deref() {
        Some(code) => LanguageContext::new(
            code.parse::<Language>()
                .with_context(|| format!("Unsupported --lang value '{code}'"))?,
        ),
        None => LanguageContext::new(Language::resolve(None, &preferred_languages_from_env())),
    };

    match &cli.command {
        Commands::Layout(args) => commands::layout::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Presets => commands::presets::run(&ctx),
        Commands::Config(args) => commands::config::run(args),
    }
}
