//! The "Work" section of a portfolio page: a titled carousel and the index
//! that drives it.
//!
//! This is the owner the carousel delegates to. It keeps the
//! [`SharedIndex`], hands the carousel the current value plus prev/next
//! handlers, and pushes fresh props down after every interaction, the way a
//! parent re-renders its children after a state change.

use maud::{Markup, Render, html};

use crate::banners::BannerSet;
use crate::carousel::{Carousel, CarouselProps};
use crate::config::SiteConfig;
use crate::content::Content;
use crate::dom::{Document, NodeId};
use crate::index::SharedIndex;

#[derive(Debug)]
pub struct WorkSection {
    title: String,
    index: SharedIndex,
    carousel: Carousel,
}

impl WorkSection {
    pub fn new(
        title: impl Into<String>,
        banners: BannerSet,
        document: &Document,
        config: &SiteConfig,
    ) -> Self {
        let index = SharedIndex::for_banners(banners.display());
        let props = CarouselProps::new(banners).follow(&index);
        Self {
            title: title.into(),
            carousel: Carousel::new(props, document, config),
            index,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index(&self) -> &SharedIndex {
        &self.index
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Deliver a click to the carousel, then re-render it with the index as
    /// it stands afterwards.
    pub fn dispatch_click(&mut self, target: NodeId) {
        self.carousel.dispatch_click(target);
        self.refresh();
    }

    fn refresh(&mut self) {
        let props = self.carousel.props().clone().follow(&self.index);
        self.carousel.set_props(props);
    }

    /// The section markup. Banner lists ride along as JSON data attributes
    /// for the page script.
    pub fn render(&mut self) -> Markup {
        self.refresh();
        let banners = &self.carousel.props().banners;
        let thumbnails = json_list(banners.display().iter().map(str::to_string));
        let enlarged = json_list(banners.enlarged().iter().map(str::to_string));
        let captions = json_list((0..banners.len()).map(|i| {
            Content::markdown(banners.caption(i).unwrap_or_default())
                .render()
                .into_string()
        }));
        let title = self.title.clone();

        html! {
            section.work
                data-thumbnails=(thumbnails)
                data-enlarged=(enlarged)
                data-captions=(captions)
                data-index=(self.index.get()) {
                h2.section-title { (title) }
                (self.carousel.render())
            }
        }
    }
}

/// A JSON array of strings. Going through `serde_json::Value` keeps this
/// infallible.
fn json_list(items: impl Iterator<Item = String>) -> String {
    serde_json::Value::from_iter(items).to_string()
}
