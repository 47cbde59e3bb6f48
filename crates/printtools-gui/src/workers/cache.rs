use std::path::PathBuf;

use printtools_core::io::image_io::SourceImage;

/// Worker-side copy of the last successfully loaded image.
pub(crate) struct SheetCache {
    pub(crate) path: Option<PathBuf>,
    pub(crate) source: Option<SourceImage>,
}

impl SheetCache {
    pub(super) fn new() -> Self {
        Self {
            path: None,
            source: None,
        }
    }

    /// Replace the cached image. Failed loads never reach here, so the
    /// previous image survives them.
    pub(crate) fn set_source(&mut self, path: PathBuf, source: SourceImage) {
        self.path = Some(path);
        self.source = Some(source);
    }
}
