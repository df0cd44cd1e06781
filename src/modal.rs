//! Full-viewport overlay with a centered content panel.
//!
//! A [`Modal`] has no visibility state of its own. The owner mounts it when
//! it should show and drops it when it should not. Mounting suspends page
//! scroll through a [`ScrollLock`] held for the modal's whole lifetime.
//!
//! ```text
//! overlay (dimmed, blurred; clicking it closes)
//! └── panel (width px; centered, or absolute at floating_offset when floating)
//!     ├── image section        (only with an image)
//!     ├── body
//!     │   ├── h2 title         (only with a title)
//!     │   └── content
//!     └── close button         (always closes)
//! ```

use maud::{Markup, html};

use crate::callback::Callback;
use crate::config::ModalConfig;
use crate::content::Content;
use crate::dom::{ClickEvent, Document, NodeId};
use crate::scroll_lock::ScrollLock;

/// Panel width when none is given.
pub const DEFAULT_WIDTH: u32 = 580;

/// Percent-encode the characters that could end a quoted CSS `url("...")`
/// early, so an image reference can only ever be a single URL.
pub fn css_url(image: &str) -> String {
    let mut out = String::with_capacity(image.len());
    for ch in image.chars() {
        match ch {
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            c if c.is_control() => out.push_str(&format!("%{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    format!("url(\"{out}\")")
}

#[derive(Debug, Clone)]
pub struct ModalProps {
    pub title: Option<Content>,
    pub content: Content,
    pub on_close: Callback,
    /// Panel width in pixels.
    pub width: u32,
    /// Image reference shown above the body.
    pub image: Option<String>,
    /// Pin the panel near the top and let the overlay scroll.
    pub is_floating: bool,
}

impl ModalProps {
    pub fn new(content: impl Into<Content>, on_close: Callback) -> Self {
        Self {
            title: None,
            content: content.into(),
            on_close,
            width: DEFAULT_WIDTH,
            image: None,
            is_floating: false,
        }
    }

    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn floating(mut self, is_floating: bool) -> Self {
        self.is_floating = is_floating;
        self
    }
}

/// Elements of a mounted modal that take part in click handling.
#[derive(Debug, Clone, Copy)]
struct ModalNodes {
    overlay: NodeId,
    panel: NodeId,
    image: NodeId,
    title: NodeId,
    content: NodeId,
    close_button: NodeId,
}

impl ModalNodes {
    fn allocate() -> Self {
        Self {
            overlay: NodeId::next(),
            panel: NodeId::next(),
            image: NodeId::next(),
            title: NodeId::next(),
            content: NodeId::next(),
            close_button: NodeId::next(),
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        [
            self.overlay,
            self.panel,
            self.image,
            self.title,
            self.content,
            self.close_button,
        ]
        .contains(&node)
    }
}

/// A mounted modal. Dropping it unmounts it and restores page scroll.
#[derive(Debug)]
pub struct Modal {
    props: ModalProps,
    nodes: ModalNodes,
    _scroll_lock: ScrollLock,
}

impl Modal {
    pub fn mount(props: ModalProps, document: &Document) -> Self {
        Self {
            props,
            nodes: ModalNodes::allocate(),
            _scroll_lock: ScrollLock::acquire(document),
        }
    }

    pub fn props(&self) -> &ModalProps {
        &self.props
    }

    /// Re-render with new props. The modal stays mounted and keeps its lock.
    pub fn set_props(&mut self, props: ModalProps) {
        self.props = props;
    }

    pub fn overlay_id(&self) -> NodeId {
        self.nodes.overlay
    }

    pub fn panel_id(&self) -> NodeId {
        self.nodes.panel
    }

    pub fn content_id(&self) -> NodeId {
        self.nodes.content
    }

    pub fn close_button_id(&self) -> NodeId {
        self.nodes.close_button
    }

    /// Overlay click handler: closes only when the click landed on the
    /// overlay itself, not when it bubbled up from inside the panel.
    pub fn handle_click_background(&self, event: &ClickEvent) {
        if event.is_on_current_target() {
            self.props.on_close.emit();
        }
    }

    /// Close button handler.
    pub fn handle_close_click(&self) {
        self.props.on_close.emit();
    }

    /// Deliver a click on `target`, bubbling from the target up to the
    /// overlay. Returns false when the target is not part of this modal.
    pub fn dispatch_click(&self, target: NodeId) -> bool {
        if !self.nodes.contains(target) {
            return false;
        }
        if target == self.nodes.close_button {
            self.handle_close_click();
        }
        self.handle_click_background(&ClickEvent::bubbled(target, self.nodes.overlay));
        true
    }

    pub fn render(&self, config: &ModalConfig) -> Markup {
        let props = &self.props;
        let overlay_style = if props.is_floating {
            "overflow: scroll;"
        } else {
            "overflow: auto;"
        };
        let panel_style = if props.is_floating {
            format!(
                "width: {}px; position: absolute; top: {}px;",
                props.width, config.floating_offset
            )
        } else {
            format!("width: {}px;", props.width)
        };

        html! {
            div.modal-overlay.floating[props.is_floating] data-node=(self.nodes.overlay) style=(overlay_style) {
                div.modal-panel data-node=(self.nodes.panel) style=(panel_style) {
                    @if let Some(image) = &props.image {
                        div.modal-image data-node=(self.nodes.image)
                            style={ "background-image: " (css_url(image)) ";" } {}
                    }
                    div.modal-body {
                        @if let Some(title) = &props.title {
                            h2.modal-title data-node=(self.nodes.title) { (title) }
                        }
                        div.modal-content data-node=(self.nodes.content) { (props.content) }
                    }
                    button.modal-close type="button" aria-label="close" data-node=(self.nodes.close_button) { "×" }
                }
            }
        }
    }
}
