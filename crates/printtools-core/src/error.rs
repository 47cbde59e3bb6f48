use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintToolsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unknown paper preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Sheet too large to render: {width}x{height} px")]
    SheetTooLarge { width: u64, height: u64 },
}

pub type Result<T> = std::result::Result<T, PrintToolsError>;
