//! The slice of the browser the components render against.
//!
//! Components never touch a real DOM. Instead they allocate [`NodeId`]s for
//! the elements that carry event handlers, receive [`ClickEvent`]s shaped
//! like the browser's (an originating `target` plus the `current_target`
//! whose handler is running), and write the page-level scroll flag through
//! a shared [`Document`].
//!
//! Everything here is single-threaded: state is shared with `Rc<Cell<_>>`,
//! mirroring the one UI event loop a page has.

use maud::{Markup, PreEscaped, Render};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Identity of a rendered element that can originate or handle a click.
///
/// Ids are unique per thread for the lifetime of the process, so two mounted
/// components never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

thread_local! {
    static NEXT_NODE: Cell<u64> = const { Cell::new(1) };
}

impl NodeId {
    /// Allocate a fresh node id.
    pub fn next() -> Self {
        NEXT_NODE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            NodeId(id)
        })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Renders as the `data-node` attribute token, e.g. `n42`.
impl Render for NodeId {
    fn render(&self) -> Markup {
        PreEscaped(self.to_string())
    }
}

/// A pointer click as seen by one handler during bubbling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Element the click originated on.
    pub target: NodeId,
    /// Element whose handler is currently running.
    pub current_target: NodeId,
}

impl ClickEvent {
    /// A click that bubbled from `target` up to the handler on `current_target`.
    pub fn bubbled(target: NodeId, current_target: NodeId) -> Self {
        Self {
            target,
            current_target,
        }
    }

    /// A click delivered straight to the element it landed on.
    pub fn direct(node: NodeId) -> Self {
        Self::bubbled(node, node)
    }

    /// True when the handler's own element is where the click landed.
    pub fn is_on_current_target(&self) -> bool {
        self.target == self.current_target
    }
}

/// The `overflow` style of the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// No inline value; the page scrolls normally.
    #[default]
    Unset,
    /// Page scroll suspended.
    Hidden,
}

impl Overflow {
    /// The inline CSS value, as it would be written to `body.style.overflow`.
    pub fn as_css(self) -> &'static str {
        match self {
            Overflow::Unset => "",
            Overflow::Hidden => "hidden",
        }
    }
}

/// Handle to the page. Clones share the same body state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    body_overflow: Rc<Cell<Overflow>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_overflow(&self) -> Overflow {
        self.body_overflow.get()
    }

    /// Whether ambient page scrolling is currently suspended.
    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow() == Overflow::Hidden
    }

    pub(crate) fn set_body_overflow(&self, overflow: Overflow) {
        self.body_overflow.set(overflow);
    }
}
