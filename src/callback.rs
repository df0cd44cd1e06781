//! Cloneable event handler passed from owners to components.

use std::fmt;
use std::rc::Rc;

/// A shared `Fn()` handler: `onClose`, `handlePrev`, `handleNext`.
///
/// Cloning shares the same closure, so a component can hand its own handler
/// down to a child without giving it up.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Callback(Rc::new(f))
    }

    /// A handler that does nothing.
    pub fn noop() -> Self {
        Callback::new(|| {})
    }

    pub fn emit(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Callback::new(f)
    }
}
