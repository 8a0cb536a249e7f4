use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid viewer config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported image URI: {0}")]
    UnsupportedUri(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Invalid script step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
