//! Unified error types for the file-loading boundary.
//!
//! The state primitives themselves never fail; these errors are surfaced
//! before a file ever reaches `ImagePreviewState`.

use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Error reading a picked file from disk
    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Path has no usable file name component
    #[error("path has no file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, AppError>;
