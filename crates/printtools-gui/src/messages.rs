use std::path::PathBuf;

use printtools_core::config::SheetConfig;
use printtools_core::layout::TileLayout;
use printtools_core::render::SheetFormat;
use printtools_core::tile::ImageAspect;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image once, producing both the preview and its aspect ratio.
    /// Skipped when a newer ticket has been issued in the meantime.
    LoadImage { path: PathBuf, ticket: u64 },

    /// Render the cached image into a sheet; format follows the extension.
    ExportSheet {
        path: PathBuf,
        layout: TileLayout,
        dpi: u32,
    },

    /// Read a TOML sheet config.
    ImportSettings { path: PathBuf },

    /// Write the current sheet config as TOML.
    ExportSettings { path: PathBuf, config: SheetConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        ticket: u64,
        path: PathBuf,
        preview: egui::ColorImage,
        aspect: ImageAspect,
        width: u32,
        height: u32,
    },
    ImageFailed {
        ticket: u64,
        path: PathBuf,
        message: String,
    },
    /// The worker picked up an export request.
    ExportStarted,
    SheetSaved {
        path: PathBuf,
        format: SheetFormat,
    },
    SettingsImported {
        config: SheetConfig,
    },
    SettingsExported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
