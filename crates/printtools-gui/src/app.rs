use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use printtools_core::consts::LANGUAGE_STORAGE_KEY;
use printtools_core::form::TilingForm;
use printtools_core::i18n::{
    preferred_languages_from_env, Language, LanguageContext, LanguageStore, MemoryLanguageStore,
};
use printtools_core::route::Page;
use tracing::{debug, info, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{LoadedImage, UIState};
use crate::workers::{self, LoadTickets};

/// Language persistence in eframe's app storage.
struct EframeLanguageStore<'a>(&'a mut dyn eframe::Storage);

impl LanguageStore for EframeLanguageStore<'_> {
    fn load_language(&self) -> Option<String> {
        self.0.get_string(LANGUAGE_STORAGE_KEY)
    }

    fn save_language(&mut self, code: &str) {
        self.0.set_string(LANGUAGE_STORAGE_KEY, code.to_string());
        self.0.flush();
    }
}

pub struct PrintToolsApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub tickets: LoadTickets,
    pub lang: LanguageContext,
    /// Used when eframe has no persistent storage.
    fallback_store: MemoryLanguageStore,
    /// Language switch requested by a panel, applied once storage is at hand.
    pub pending_language: Option<Language>,
    pub page: Page,
    pub form: TilingForm,
    pub ui_state: UIState,
}

impl PrintToolsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: Page) -> std::io::Result<Self> {
        crate::fonts::install_cjk_fallback(&cc.egui_ctx);

        let (result_tx, result_rx) = mpsc::channel();
        let tickets = LoadTickets::new();
        let cmd_tx = workers::spawn_worker(result_tx, tickets.clone(), cc.egui_ctx.clone())?;

        let stored = cc
            .storage
            .and_then(|storage| storage.get_string(LANGUAGE_STORAGE_KEY));
        let store = stored
            .map(MemoryLanguageStore::with_value)
            .unwrap_or_default();
        let lang = LanguageContext::initialize(&store, &preferred_languages_from_env());
        info!("Starting on {} in {}", page.path(), lang.language());

        Ok(Self {
            cmd_tx,
            result_rx,
            tickets,
            lang,
            fallback_store: store,
            pending_language: None,
            page,
            form: TilingForm::default(),
            ui_state: UIState::default(),
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    ticket,
                    path,
                    preview,
                    aspect,
                    width,
                    height,
                } => {
                    if !self.tickets.is_current(ticket) {
                        debug!("Ignoring superseded image #{ticket}");
                        continue;
                    }
                    self.ui_state.handled_ticket = ticket;
                    let texture = ctx.load_texture("tile-image", preview, egui::TextureOptions::LINEAR);
                    self.form.set_image_aspect(Some(aspect));
                    self.ui_state.add_log(format!(
                        "Opened: {} ({width}x{height})",
                        path.display()
                    ));
                    self.ui_state.image = Some(LoadedImage {
                        path,
                        width,
                        height,
                        texture,
                    });
                }
                WorkerResult::ImageFailed {
                    ticket,
                    path,
                    message,
                } => {
                    if !self.tickets.is_current(ticket) {
                        continue;
                    }
                    self.ui_state.handled_ticket = ticket;
                    warn!("Image load failed for {}: {message}", path.display());
                    self.ui_state
                        .add_log(self.lang.t_with("imageLoadFailed", &[("error", message)]));
                }
                WorkerResult::ExportStarted => {
                    self.ui_state.exporting = true;
                }
                WorkerResult::SheetSaved { path, format } => {
                    self.ui_state.exporting = false;
                    let path = path.display().to_string();
                    self.ui_state.add_log(format!(
                        "{} ({format})",
                        self.lang.t_with("sheetSaved", &[("path", path)])
                    ));
                }
                WorkerResult::SettingsImported { config } => {
                    self.apply_config(TilingForm::from_config(&config));
                    self.ui_state.add_log("Settings imported".into());
                }
                WorkerResult::SettingsExported { path } => {
                    self.ui_state
                        .add_log(format!("Settings saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.exporting = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Swap in a new form, keeping the loaded image's aspect.
    pub fn apply_config(&mut self, mut form: TilingForm) {
        form.set_image_aspect(self.form.image_aspect());
        self.form = form;
    }

    /// Start decoding `path`; any earlier load in flight is superseded.
    pub fn load_image(&self, path: PathBuf) {
        let ticket = self.tickets.issue();
        self.send_command(WorkerCommand::LoadImage { path, ticket });
    }

    /// An image selection has not produced a result yet.
    pub fn is_loading(&self) -> bool {
        self.tickets.latest() != self.ui_state.handled_ticket
    }

    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            debug!("Navigate {} -> {}", self.page.path(), page.path());
            self.page = page;
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Commit idle numeric inputs and wake up again for the next deadline.
    fn poll_form(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        for (id, outcome) in self.form.poll(now) {
            debug!("Idle commit of {id}: {outcome:?}");
        }
        if let Some(deadline) = self.form.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn apply_pending_language(&mut self, frame: &mut eframe::Frame) {
        let Some(language) = self.pending_language.take() else {
            return;
        };
        match frame.storage_mut() {
            Some(storage) => self
                .lang
                .set_language(language, &mut EframeLanguageStore(storage)),
            None => self.lang.set_language(language, &mut self.fallback_store),
        }
        info!("UI language set to {language}");
    }
}

impl eframe::App for PrintToolsApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.poll_form(ctx);

        let dropped: Vec<PathBuf> =
            ctx.input(|i| i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect());
        if let Some(path) = dropped.into_iter().last() {
            self.navigate(Page::ImageTiler);
            self.load_image(path);
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        match self.page {
            Page::Home => panels::home::show(ctx, self),
            Page::ImageTiler => {
                panels::tiler::show(ctx, self);
                panels::preview::show(ctx, self);
            }
            Page::NotFound => panels::not_found::show(ctx, self),
        }

        if self.pending_language.is_some() {
            self.apply_pending_language(frame);
            ctx.request_repaint();
        }
    }
}
