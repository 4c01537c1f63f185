//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors and provides semantic variants for each pipeline
//! stage that can fail: decode, content detection, partitioning, and export.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Rect, Section};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode {}: {source}", .path.display())]
    DecodeFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {message}", .path.display())]
    EncodeFailed { path: PathBuf, message: String },

    #[error("Image contains no pixels with nonzero alpha")]
    NoContentFound,

    #[error("Invalid partition: {region} region {rect} does not fit {width}x{height}")]
    InvalidPartition {
        region: &'static str,
        rect: Rect,
        width: u32,
        height: u32,
    },

    #[error("Failed to export {section} section to {}: {message}", .path.display())]
    ExportFailed {
        section: Section,
        path: PathBuf,
        message: String,
    },

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
