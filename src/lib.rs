//! # Folio Carousel
//!
//! Modal and image carousel components for photography portfolio pages.
//!
//! The components are headless: each is a plain Rust value holding its
//! props and local state, rendering HTML with [Maud](https://maud.lambda.xyz/)
//! and reacting to synthetic clicks. A browser is stood in for by
//! [`dom::Document`], whose only piece of global state is the page body's
//! scroll flag.
//!
//! # Component Tree
//!
//! ```text
//! WorkSection            owns the SharedIndex
//! └── Carousel           three panes, delegates prev/next to the owner
//!     ├── CarouselPointer
//!     └── Modal          mounted while the carousel's ModalVisibility is open
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Node ids, click events, the page `Document` |
//! | [`scroll_lock`] | Guard that suspends page scroll until dropped |
//! | [`callback`] | Cloneable `Fn()` handlers passed from owners to children |
//! | [`content`] | Text, markup or Markdown for modal slots |
//! | [`hooks`] | `use_modal()` visibility state |
//! | [`banners`] | Display and enlarged banner sequences |
//! | [`index`] | Owner-side circular index |
//! | [`modal`] | The overlay component |
//! | [`work_modal`] | Enlarged-image modal preset |
//! | [`pointer`] | Position dots |
//! | [`carousel`] | The carousel component |
//! | [`work`] | Titled section owning a carousel and its index |
//! | [`config`] | `config.toml` loading, validation and CSS generation |
//! | [`data`] | `banners.toml` loading |
//! | [`generate`] | Standalone page rendering |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Owners Move The Index
//!
//! A carousel receives `current_carousel_index` and two handlers; it never
//! changes the index itself. The owner's [`index::SharedIndex`] can be
//! cloned into several carousels that then move together.
//!
//! ## Scroll Lock As A Guard
//!
//! A mounted [`modal::Modal`] holds a [`scroll_lock::ScrollLock`]. There is
//! no separate "unmount" call to forget: whatever drops the modal (its close
//! button, a background click, the parent going away) restores scrolling.
//!
//! ## Two Sequences, One Index
//!
//! Display banners and enlarged images are separate lists addressed by the
//! same index. [`banners::BannerSet`] only exists when both are non-empty
//! and equally long, so an index valid for one is valid for the other.

pub mod banners;
pub mod callback;
pub mod carousel;
pub mod config;
pub mod content;
pub mod data;
pub mod dom;
pub mod generate;
pub mod hooks;
pub mod index;
pub mod modal;
pub mod output;
pub mod pointer;
pub mod scroll_lock;
pub mod work;
pub mod work_modal;

#[cfg(test)]
pub(crate) mod test_helpers;
