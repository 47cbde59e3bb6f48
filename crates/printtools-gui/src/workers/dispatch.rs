use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};

use super::cache::SheetCache;
use super::io;
use super::tickets::LoadTickets;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    tickets: LoadTickets,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("printtools-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, tickets, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    tickets: LoadTickets,
    ctx: egui::Context,
) {
    let mut cache = SheetCache::new();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, ticket } => {
                io::handle_load_image(&path, ticket, &tickets, &mut cache, &tx, &ctx);
            }
            WorkerCommand::ExportSheet { path, layout, dpi } => {
                io::handle_export_sheet(&path, &layout, dpi, &cache, &tx, &ctx);
            }
            WorkerCommand::ImportSettings { path } => {
                io::handle_import_settings(&path, &tx, &ctx);
            }
            WorkerCommand::ExportSettings { path, config } => {
                io::handle_export_settings(&path, &config, &tx, &ctx);
            }
        }
    }
}
