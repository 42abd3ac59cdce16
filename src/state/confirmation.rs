//! Confirmation state for deferring destructive actions.
//!
//! Holds the subject of a pending confirmation. The subject type is supplied
//! by the view and never inspected here.

use log::debug;
use serde::Serialize;

/// Capability a view binds to for confirm/cancel prompts.
pub trait Confirmation<T> {
    fn is_open(&self) -> bool;

    /// The pending subject, `None` when closed.
    fn item(&self) -> Option<&T>;

    /// Opens the prompt for `item`, replacing any pending subject.
    fn open(&mut self, item: T);

    /// Closes the prompt. Safe to call when already closed.
    fn close(&mut self);
}

/// Two-state toggle between closed and open with a subject.
///
/// Stored as a single `Option`, so a subject exists exactly when the prompt is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationState<T> {
    pending: Option<T>,
}

impl<T> ConfirmationState<T> {
    /// Creates a closed confirmation state.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Closes the prompt and hands back the subject that was pending.
    pub fn take(&mut self) -> Option<T> {
        let item = self.pending.take();
        if item.is_some() {
            debug!("Confirmation accepted");
        }
        item
    }

    /// Returns an immutable copy of the current state for rendering.
    pub fn snapshot(&self) -> ConfirmationSnapshot<T>
    where
        T: Clone,
    {
        ConfirmationSnapshot {
            is_open: self.is_open(),
            item: self.pending.clone(),
        }
    }
}

impl<T> Default for ConfirmationState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Confirmation<T> for ConfirmationState<T> {
    fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    fn item(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    fn open(&mut self, item: T) {
        if self.pending.is_some() {
            debug!("Confirmation reopened, replacing pending item");
        } else {
            debug!("Confirmation opened");
        }
        self.pending = Some(item);
    }

    fn close(&mut self) {
        if self.pending.take().is_some() {
            debug!("Confirmation closed");
        }
    }
}

/// Render-time view of a `ConfirmationState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationSnapshot<T> {
    pub is_open: bool,
    pub item: Option<T>,
}
