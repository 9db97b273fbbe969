use thiserror::Error;

pub use emission_factors::TableError;

pub use crate::ai::{AiError, ConfigError};
pub use crate::footprint::PortionError;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),

    #[error("Could not detect image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0:?}. Allowed: JPEG, PNG, GIF, WebP")]
    UnsupportedFormat(image::ImageFormat),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}
