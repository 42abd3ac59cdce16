//! Binary file handles picked by the user.
//!
//! A `BinaryFile` is opaque to the state primitives: they store it, hand it to
//! the object-URL factory and expose its metadata in snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Handle onto user-selected file data.
///
/// Cloning is cheap and yields the same file: clones compare equal. Two
/// handles built separately from identical bytes are different files.
#[derive(Clone)]
pub struct BinaryFile {
    id: Uuid,
    name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
    last_modified: DateTime<Utc>,
}

impl BinaryFile {
    /// Creates a file handle from in-memory bytes, stamped with the current time.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::with_last_modified(name, mime_type, bytes, Utc::now())
    }

    /// Creates a file handle with an explicit modification time.
    pub fn with_last_modified(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
            last_modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Returns the serializable metadata of this file, without its bytes.
    pub fn info(&self) -> FileInfo {
        FileInfo {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size: self.size(),
            last_modified: self.last_modified,
        }
    }
}

impl PartialEq for BinaryFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BinaryFile {}

impl fmt::Debug for BinaryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size())
            .field("last_modified", &self.last_modified)
            .finish()
    }
}

/// File metadata as exposed to page views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub mime_type: String,
    pub size: usize,
    pub last_modified: DateTime<Utc>,
}
