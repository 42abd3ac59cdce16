//! Interaction state for admin page views.
//!
//! Two independent primitives: `ConfirmationState` for confirm/cancel prompts
//! and `ImagePreviewState` for file pickers with an owned image preview.

pub mod config;
pub mod error;
pub mod file;
pub mod file_utils;
pub mod object_url;
pub mod state;

pub use error::{AppError, Result};
pub use file::{BinaryFile, FileInfo};
pub use object_url::{ObjectUrl, ObjectUrlFactory, ObjectUrlRegistry};
pub use state::{
    Confirmation, ConfirmationSnapshot, ConfirmationState, ImagePreview, ImagePreviewSnapshot,
    ImagePreviewState,
};
