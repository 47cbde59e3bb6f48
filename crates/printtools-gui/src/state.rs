use std::path::PathBuf;

/// The image currently shown in the preview.
pub struct LoadedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub texture: egui::TextureHandle,
}

impl LoadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub image: Option<LoadedImage>,
    /// Ticket of the last load result shown (image or failure).
    pub handled_ticket: u64,
    /// A sheet export is running on the worker.
    pub exporting: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
