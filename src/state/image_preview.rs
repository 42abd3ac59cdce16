//! Image preview state for file pickers.
//!
//! Binds the most recently picked file to a renderable preview reference.
//! A preview derived from a file is owned by the state and revoked when it is
//! superseded, reset, overwritten or dropped. A caller-supplied preview is
//! never revoked.

use crate::file::{BinaryFile, FileInfo};
use crate::object_url::{ObjectUrl, ObjectUrlFactory, ObjectUrlRegistry};
use log::debug;
use serde::Serialize;
use std::rc::Rc;

/// Capability a view binds to for picking and previewing an image.
pub trait ImagePreview {
    /// The most recently picked file, `None` if none or cleared.
    fn file(&self) -> Option<&BinaryFile>;

    /// Reference the rendering layer can use as an image source.
    fn preview(&self) -> &str;

    /// Stores the picked file and derives a fresh preview from it.
    ///
    /// Passing `None` clears the file but leaves the preview as it is; only
    /// `reset` restores the initial preview.
    fn handle_file_change(&mut self, file: Option<BinaryFile>);

    /// Clears the file and restores the initial preview.
    fn reset(&mut self);

    /// Shows `value` as the preview without touching the file.
    fn set_preview(&mut self, value: String);
}

enum Preview<F: ObjectUrlFactory> {
    /// Supplied by the caller, never revoked here.
    External(String),
    /// Derived from a picked file.
    Owned(ObjectUrl<F>),
}

impl<F: ObjectUrlFactory> Preview<F> {
    fn as_str(&self) -> &str {
        match self {
            Preview::External(url) => url,
            Preview::Owned(url) => url.as_str(),
        }
    }
}

/// File selection plus the preview reference derived from it.
pub struct ImagePreviewState<F: ObjectUrlFactory = ObjectUrlRegistry> {
    factory: Rc<F>,
    initial_preview: String,
    file: Option<BinaryFile>,
    preview: Preview<F>,
}

impl ImagePreviewState<ObjectUrlRegistry> {
    /// Creates a state backed by a fresh `ObjectUrlRegistry`.
    pub fn with_registry(initial_preview: Option<String>) -> Self {
        Self::new(ObjectUrlRegistry::new(), initial_preview)
    }
}

impl<F: ObjectUrlFactory> ImagePreviewState<F> {
    /// Creates a state with no file, showing `initial_preview` (empty if `None`).
    pub fn new(factory: F, initial_preview: Option<String>) -> Self {
        let initial_preview = initial_preview.unwrap_or_default();
        Self {
            factory: Rc::new(factory),
            preview: Preview::External(initial_preview.clone()),
            initial_preview,
            file: None,
        }
    }

    pub fn initial_preview(&self) -> &str {
        &self.initial_preview
    }

    /// Whether the current preview was derived from a file by this state.
    pub fn has_owned_preview(&self) -> bool {
        matches!(self.preview, Preview::Owned(_))
    }

    /// Returns an immutable copy of the current state for rendering.
    pub fn snapshot(&self) -> ImagePreviewSnapshot {
        ImagePreviewSnapshot {
            file: self.file.as_ref().map(BinaryFile::info),
            preview: self.preview.as_str().to_string(),
        }
    }
}

impl<F: ObjectUrlFactory> ImagePreview for ImagePreviewState<F> {
    fn file(&self) -> Option<&BinaryFile> {
        self.file.as_ref()
    }

    fn preview(&self) -> &str {
        self.preview.as_str()
    }

    fn handle_file_change(&mut self, file: Option<BinaryFile>) {
        match file {
            Some(file) => {
                let url = ObjectUrl::create(&self.factory, &file);
                debug!("Preview for {} is now {}", file.name(), url.as_str());
                // Assigning drops the previous preview, revoking it if owned.
                self.preview = Preview::Owned(url);
                self.file = Some(file);
            }
            None => {
                debug!("File cleared, preview kept");
                self.file = None;
            }
        }
    }

    fn reset(&mut self) {
        debug!("Preview reset to initial value");
        self.file = None;
        self.preview = Preview::External(self.initial_preview.clone());
    }

    fn set_preview(&mut self, value: String) {
        debug!("Preview set externally to {}", value);
        self.preview = Preview::External(value);
    }
}

/// Render-time view of an `ImagePreviewState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePreviewSnapshot {
    pub file: Option<FileInfo>,
    pub preview: String,
}
