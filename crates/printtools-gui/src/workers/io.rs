use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use printtools_core::config::SheetConfig;
use printtools_core::io::image_io::load_source_image;
use printtools_core::layout::TileLayout;
use printtools_core::render::save_sheet;
use tracing::{debug, warn};

use crate::convert::{source_to_color_image, MAX_PREVIEW_EDGE};
use crate::messages::WorkerResult;

use super::tickets::LoadTickets;
use super::{send, send_error, send_log, SheetCache};

pub(super) fn handle_load_image(
    path: &Path,
    ticket: u64,
    tickets: &LoadTickets,
    cache: &mut SheetCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    if !tickets.is_current(ticket) {
        debug!("Skipping superseded load #{ticket} of {}", path.display());
        return;
    }

    let source = match load_source_image(path) {
        Ok(source) => source,
        Err(e) => {
            warn!("Failed to load {}: {e}", path.display());
            send(
                tx,
                ctx,
                WorkerResult::ImageFailed {
                    ticket,
                    path: path.to_path_buf(),
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    // A newer selection may have arrived while decoding.
    if !tickets.is_current(ticket) {
        debug!("Dropping superseded load #{ticket} of {}", path.display());
        return;
    }

    let preview = source_to_color_image(&source, MAX_PREVIEW_EDGE);
    let result = WorkerResult::ImageLoaded {
        ticket,
        path: path.to_path_buf(),
        preview,
        aspect: source.aspect,
        width: source.width(),
        height: source.height(),
    };
    cache.set_source(path.to_path_buf(), source);
    send(tx, ctx, result);
}

pub(super) fn handle_export_sheet(
    path: &Path,
    layout: &TileLayout,
    dpi: u32,
    cache: &SheetCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(ref source) = cache.source else {
        send_error(tx, ctx, "No image loaded");
        return;
    };

    send(tx, ctx, WorkerResult::ExportStarted);
    if let Some(ref source_path) = cache.path {
        debug!("Exporting sheet of {}", source_path.display());
    }

    let start = Instant::now();
    match save_sheet(layout, source, path, dpi) {
        Ok(format) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Rendered {} tiles in {:.1}s",
                    layout.total(),
                    start.elapsed().as_secs_f32()
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::SheetSaved {
                    path: path.to_path_buf(),
                    format,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}

fn read_settings(path: &Path) -> Result<SheetConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid settings in {}", path.display()))
}

fn write_settings(path: &Path, config: &SheetConfig) -> Result<()> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

pub(super) fn handle_import_settings(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match read_settings(path) {
        Ok(config) => send(tx, ctx, WorkerResult::SettingsImported { config }),
        Err(e) => send_error(tx, ctx, format!("{e:#}")),
    }
}

pub(super) fn handle_export_settings(
    path: &Path,
    config: &SheetConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match write_settings(path, config) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::SettingsExported {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("{e:#}")),
    }
}
