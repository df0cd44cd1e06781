//! Component-local state containers.

use std::cell::Cell;
use std::rc::Rc;

use crate::callback::Callback;

/// Whether a component's modal is showing.
///
/// Two states, Closed (initial) and Open. Only [`open_modal`] opens and only
/// [`close_modal`] closes; dropping the owner discards the state, which is
/// the same as closing. Clones share the flag, so the close callback handed
/// to a modal flips the owner's state.
///
/// [`open_modal`]: ModalVisibility::open_modal
/// [`close_modal`]: ModalVisibility::close_modal
#[derive(Debug, Clone, Default)]
pub struct ModalVisibility {
    shown: Rc<Cell<bool>>,
}

/// Create closed modal visibility state for one component.
pub fn use_modal() -> ModalVisibility {
    ModalVisibility::default()
}

impl ModalVisibility {
    pub fn open_modal(&self) {
        self.shown.set(true);
    }

    pub fn close_modal(&self) {
        self.shown.set(false);
    }

    pub fn is_show_modal(&self) -> bool {
        self.shown.get()
    }

    /// `close_modal` as a handler for a modal's `on_close`.
    pub fn close_callback(&self) -> Callback {
        let state = self.clone();
        Callback::new(move || state.close_modal())
    }
}
