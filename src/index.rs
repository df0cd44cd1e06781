//! Owner-side carousel index.
//!
//! A carousel never moves itself. Its owner keeps a [`SharedIndex`], passes
//! the current value down as a prop, and hands over the callbacks from
//! [`SharedIndex::handlers`] as `handle_prev` / `handle_next`. Clones share
//! one index, so several carousels can follow the same position.

use std::cell::Cell;
use std::rc::Rc;

use crate::banners::{BannerError, BannerSequence};
use crate::callback::Callback;

#[derive(Debug, Clone)]
pub struct SharedIndex {
    current: Rc<Cell<usize>>,
    len: usize,
}

impl SharedIndex {
    /// Index over `len` positions, starting at 0.
    pub fn new(len: usize) -> Result<Self, BannerError> {
        if len == 0 {
            return Err(BannerError::Empty);
        }
        Ok(Self {
            current: Rc::new(Cell::new(0)),
            len,
        })
    }

    pub fn for_banners(banners: &BannerSequence) -> Self {
        Self {
            current: Rc::new(Cell::new(0)),
            len: banners.len(),
        }
    }

    pub fn get(&self) -> usize {
        self.current.get()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `index`, reduced modulo the length.
    pub fn set(&self, index: usize) {
        self.current.set(index % self.len);
    }

    pub fn advance(&self) {
        self.set(self.get() + 1);
    }

    pub fn retreat(&self) {
        self.set(self.get() + self.len - 1);
    }

    /// `(handle_prev, handle_next)` bound to this index.
    pub fn handlers(&self) -> (Callback, Callback) {
        let prev = self.clone();
        let next = self.clone();
        (
            Callback::new(move || prev.retreat()),
            Callback::new(move || next.advance()),
        )
    }
}
