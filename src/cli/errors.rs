use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Threshold must be a finite positive number, got: {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("Maximum line thickness must be greater than 0, got: {thickness}")]
    ZeroThickness { thickness: u32 },

    #[error("Processing error: {0}")]
    Processing(#[from] trisect::Error),
}
