//! Object URLs: renderable references minted for picked files.
//!
//! A minted URL stays resolvable until it is revoked. `ObjectUrl` ties that
//! revocation to ownership so a derived preview is released exactly once.

use crate::config::{DEFAULT_OBJECT_URL_ORIGIN, OBJECT_URL_SCHEME};
use crate::file::BinaryFile;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Mints and revokes preview references for files.
pub trait ObjectUrlFactory {
    /// Returns a fresh, non-empty reference to `file`.
    fn create_object_url(&self, file: &BinaryFile) -> String;

    /// Releases a reference previously returned by `create_object_url`.
    fn revoke_object_url(&self, url: &str);
}

/// In-process store of live object URLs.
#[derive(Clone)]
pub struct ObjectUrlRegistry {
    origin: Rc<str>,
    urls: Rc<RefCell<HashMap<String, BinaryFile>>>,
}

impl ObjectUrlRegistry {
    /// Creates an empty registry using the default origin.
    pub fn new() -> Self {
        Self::with_origin(DEFAULT_OBJECT_URL_ORIGIN)
    }

    /// Creates an empty registry minting URLs under `origin`.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: origin.into(),
            urls: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Looks up the file behind a live URL.
    pub fn resolve(&self, url: &str) -> Option<BinaryFile> {
        self.urls.borrow().get(url).cloned()
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.urls.borrow().contains_key(url)
    }

    /// Number of URLs minted and not yet revoked.
    pub fn live_count(&self) -> usize {
        self.urls.borrow().len()
    }
}

impl Default for ObjectUrlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectUrlFactory for ObjectUrlRegistry {
    fn create_object_url(&self, file: &BinaryFile) -> String {
        let url = format!("{}{}/{}", OBJECT_URL_SCHEME, self.origin, Uuid::new_v4());
        debug!("Object URL CREATE: {} -> {}", url, file.name());
        self.urls.borrow_mut().insert(url.clone(), file.clone());
        url
    }

    fn revoke_object_url(&self, url: &str) {
        if self.urls.borrow_mut().remove(url).is_some() {
            debug!("Object URL REVOKE: {}", url);
        } else {
            warn!("Revoking unknown object URL: {}", url);
        }
    }
}

impl fmt::Debug for ObjectUrlRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectUrlRegistry")
            .field("origin", &self.origin)
            .field("live", &self.live_count())
            .finish()
    }
}

/// An owned object URL, revoked when dropped.
///
/// Holds the very factory instance that minted it, so the revoke reaches the
/// same store whatever the factory's `Clone` semantics are.
pub struct ObjectUrl<F: ObjectUrlFactory> {
    url: String,
    factory: Rc<F>,
}

impl<F: ObjectUrlFactory> ObjectUrl<F> {
    /// Mints a URL for `file` through `factory`.
    pub fn create(factory: &Rc<F>, file: &BinaryFile) -> Self {
        Self {
            url: factory.create_object_url(file),
            factory: Rc::clone(factory),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<F: ObjectUrlFactory> Drop for ObjectUrl<F> {
    fn drop(&mut self) {
        self.factory.revoke_object_url(&self.url);
    }
}

impl<F: ObjectUrlFactory> fmt::Debug for ObjectUrl<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}
