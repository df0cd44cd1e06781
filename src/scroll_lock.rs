//! Page scroll suspension tied to a value's lifetime.
//!
//! [`ScrollLock::acquire`] hides the body overflow; dropping the lock puts
//! it back. Components hold the lock as a field, so every way they can go
//! away (close button, background click, the parent dropping them, a panic
//! unwinding through the owner) restores scrolling.
//!
//! Release is unconditional: the body overflow goes back to unset even if
//! another lock is still alive. Only one overlay is expected on screen at a
//! time.

use crate::dom::{Document, Overflow};

#[derive(Debug)]
#[must_use = "scrolling is restored as soon as the lock is dropped"]
pub struct ScrollLock {
    document: Document,
}

impl ScrollLock {
    pub fn acquire(document: &Document) -> Self {
        document.set_body_overflow(Overflow::Hidden);
        Self {
            document: document.clone(),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.set_body_overflow(Overflow::Unset);
    }
}
