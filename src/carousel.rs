//! Three-pane carousel over a circular banner sequence.
//!
//! The carousel shows the banner at the current index flanked by its
//! neighbours, wrapping at both ends:
//!
//! ```text
//! banners = [A, B, C, D]
//! index 0 → (D, A, B)
//! index 3 → (C, D, A)
//! ```
//!
//! It does not own that index. The owner passes `current_carousel_index`
//! down and receives prev/next clicks through `handle_prev` / `handle_next`,
//! so several carousels can follow one index (see [`SharedIndex`]).
//!
//! Clicking the centered banner remembers the index in local state and
//! opens a [`work_modal`] showing the matching entry of the *enlarged*
//! sequence. The modal is mounted only while the carousel's
//! [`ModalVisibility`] is open.
//!
//! [`SharedIndex`]: crate::index::SharedIndex
//! [`work_modal`]: crate::work_modal::work_modal

use maud::{Markup, html};

use crate::banners::{BannerSequence, BannerSet};
use crate::callback::Callback;
use crate::config::SiteConfig;
use crate::dom::{Document, NodeId};
use crate::hooks::{ModalVisibility, use_modal};
use crate::index::SharedIndex;
use crate::modal::Modal;
use crate::pointer::CarouselPointer;
use crate::work_modal::work_modal;

#[derive(Debug, Clone)]
pub struct CarouselProps {
    pub banners: BannerSet,
    /// Index of the centered banner. Owned by the parent.
    pub current_carousel_index: usize,
    /// Index shown by the pointer.
    pub current_banner_index: usize,
    pub handle_prev: Option<Callback>,
    pub handle_next: Option<Callback>,
}

impl CarouselProps {
    pub fn new(banners: BannerSet) -> Self {
        Self {
            banners,
            current_carousel_index: 0,
            current_banner_index: 0,
            handle_prev: None,
            handle_next: None,
        }
    }

    pub fn carousel_index(mut self, index: usize) -> Self {
        self.current_carousel_index = index;
        self
    }

    pub fn banner_index(mut self, index: usize) -> Self {
        self.current_banner_index = index;
        self
    }

    pub fn on_prev(mut self, handler: Callback) -> Self {
        self.handle_prev = Some(handler);
        self
    }

    pub fn on_next(mut self, handler: Callback) -> Self {
        self.handle_next = Some(handler);
        self
    }

    /// Take both indices and both handlers from an owner-side index.
    pub fn follow(self, index: &SharedIndex) -> Self {
        let (prev, next) = index.handlers();
        self.carousel_index(index.get())
            .banner_index(index.get())
            .on_prev(prev)
            .on_next(next)
    }
}

/// The three banners on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<'a> {
    pub previous: &'a str,
    pub current: &'a str,
    pub next: &'a str,
}

/// `(S[(i-1+n)%n], S[i%n], S[(i+1)%n])`.
pub fn visible_triplet(banners: &BannerSequence, index: usize) -> Triplet<'_> {
    Triplet {
        previous: banners.at(banners.previous_index(index)),
        current: banners.at(index),
        next: banners.at(banners.next_index(index)),
    }
}

#[derive(Debug, Clone, Copy)]
struct CarouselNodes {
    left_button: NodeId,
    right_button: NodeId,
    center: NodeId,
    center_image: NodeId,
}

#[derive(Debug)]
pub struct Carousel {
    props: CarouselProps,
    document: Document,
    config: SiteConfig,
    modal: ModalVisibility,
    current_modal_image_index: usize,
    mounted_modal: Option<Modal>,
    nodes: CarouselNodes,
}

impl Carousel {
    pub fn new(props: CarouselProps, document: &Document, config: &SiteConfig) -> Self {
        Self {
            props,
            document: document.clone(),
            config: config.clone(),
            modal: use_modal(),
            current_modal_image_index: 0,
            mounted_modal: None,
            nodes: CarouselNodes {
                left_button: NodeId::next(),
                right_button: NodeId::next(),
                center: NodeId::next(),
                center_image: NodeId::next(),
            },
        }
    }

    pub fn props(&self) -> &CarouselProps {
        &self.props
    }

    /// Receive new props from the owner, e.g. after it moved the index.
    pub fn set_props(&mut self, props: CarouselProps) {
        self.props = props;
        self.sync_modal();
    }

    pub fn triplet(&self) -> Triplet<'_> {
        visible_triplet(self.props.banners.display(), self.props.current_carousel_index)
    }

    pub fn pointer(&self) -> CarouselPointer {
        CarouselPointer::new(self.props.current_banner_index, self.props.banners.len())
    }

    pub fn current_modal_image_index(&self) -> usize {
        self.current_modal_image_index
    }

    /// Enlarged image for the remembered modal index.
    pub fn current_image(&self) -> &str {
        self.props
            .banners
            .enlarged()
            .at(self.current_modal_image_index)
    }

    pub fn is_show_modal(&self) -> bool {
        self.modal.is_show_modal()
    }

    /// The mounted modal, if showing.
    pub fn modal(&self) -> Option<&Modal> {
        self.mounted_modal.as_ref()
    }

    pub fn left_button_id(&self) -> NodeId {
        self.nodes.left_button
    }

    pub fn right_button_id(&self) -> NodeId {
        self.nodes.right_button
    }

    pub fn center_id(&self) -> NodeId {
        self.nodes.center
    }

    pub fn center_image_id(&self) -> NodeId {
        self.nodes.center_image
    }

    /// Center click: remember the index and open the modal.
    pub fn handle_image_click(&mut self) {
        self.current_modal_image_index = self.props.current_carousel_index;
        self.modal.open_modal();
        self.sync_modal();
    }

    pub fn handle_prev(&self) {
        if let Some(handler) = &self.props.handle_prev {
            handler.emit();
        }
    }

    pub fn handle_next(&self) {
        if let Some(handler) = &self.props.handle_next {
            handler.emit();
        }
    }

    /// Deliver a click on `target` to whichever handler owns it, then
    /// reconcile the modal with the visibility state.
    pub fn dispatch_click(&mut self, target: NodeId) {
        let handled_by_modal = self
            .mounted_modal
            .as_ref()
            .is_some_and(|modal| modal.dispatch_click(target));

        if !handled_by_modal {
            if target == self.nodes.left_button {
                self.handle_prev();
            } else if target == self.nodes.right_button {
                self.handle_next();
            } else if target == self.nodes.center || target == self.nodes.center_image {
                self.handle_image_click();
            }
        }
        self.sync_modal();
    }

    /// Mount, update or unmount the modal to match the visibility state.
    fn sync_modal(&mut self) {
        if !self.modal.is_show_modal() {
            // Dropping the modal releases its scroll lock.
            self.mounted_modal = None;
            return;
        }
        let props = work_modal(
            self.current_image(),
            self.props.banners.caption(self.current_modal_image_index),
            self.modal.close_callback(),
            &self.config.modal,
        );
        match &mut self.mounted_modal {
            Some(modal) => modal.set_props(props),
            None => self.mounted_modal = Some(Modal::mount(props, &self.document)),
        }
    }

    pub fn render(&mut self) -> Markup {
        self.sync_modal();
        let triplet = self.triplet();
        let nodes = self.nodes;

        html! {
            div.carousel data-index=(self.props.current_carousel_index) {
                button.carousel-button.prev type="button" aria-label="previous" data-node=(nodes.left_button) {
                    span.carousel-arrow { "‹" }
                }
                div.carousel-content {
                    img.carousel-image.side src=(triplet.previous) alt="carousel";
                    div.carousel-center data-node=(nodes.center) {
                        img.carousel-image.center src=(triplet.current) alt="carousel" data-node=(nodes.center_image);
                        (self.pointer())
                    }
                    img.carousel-image.side src=(triplet.next) alt="carousel";
                }
                button.carousel-button.next type="button" aria-label="next" data-node=(nodes.right_button) {
                    span.carousel-arrow { "›" }
                }
                @if let Some(modal) = &self.mounted_modal {
                    (modal.render(&self.config.modal))
                }
            }
        }
    }
}
