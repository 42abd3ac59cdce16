//! State primitives that page views bind to.

pub mod confirmation;
pub mod image_preview;

pub use confirmation::{Confirmation, ConfirmationSnapshot, ConfirmationState};
pub use image_preview::{ImagePreview, ImagePreviewSnapshot, ImagePreviewState};
