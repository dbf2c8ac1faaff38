use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to decode image {}: {source}", .path.display())]
    DecodeError {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    EncodeError {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
