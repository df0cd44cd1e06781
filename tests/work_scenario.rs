//! End-to-end behavior of a Work section driven through its public API.

use folio_carousel::banners::BannerSet;
use folio_carousel::carousel::{Carousel, CarouselProps};
use folio_carousel::config::SiteConfig;
use folio_carousel::dom::Document;
use folio_carousel::index::SharedIndex;
use folio_carousel::work::WorkSection;

fn banners() -> BannerSet {
    BannerSet::from_lists(
        ["A", "B", "C", "D"].map(String::from).to_vec(),
        ["A-modal", "B-modal", "C-modal", "D-modal"]
            .map(String::from)
            .to_vec(),
    )
    .unwrap()
}

fn triplet(carousel: &Carousel) -> (String, String, String) {
    let t = carousel.triplet();
    (t.previous.to_string(), t.current.to_string(), t.next.to_string())
}

fn owned(t: (&str, &str, &str)) -> (String, String, String) {
    (t.0.to_string(), t.1.to_string(), t.2.to_string())
}

#[test]
fn browse_open_close_and_move_on() {
    let doc = Document::new();
    let mut work = WorkSection::new("Work", banners(), &doc, &SiteConfig::default());

    assert_eq!(triplet(work.carousel()), owned(("D", "A", "B")));

    // Click the centered banner: modal shows the enlarged A.
    let center = work.carousel().center_image_id();
    work.dispatch_click(center);
    assert!(work.carousel().is_show_modal());
    assert_eq!(work.carousel().current_modal_image_index(), 0);
    assert_eq!(work.carousel().current_image(), "A-modal");
    assert!(doc.is_scroll_locked());

    // Close it from the background.
    let overlay = work.carousel().modal().unwrap().overlay_id();
    work.dispatch_click(overlay);
    assert!(!work.carousel().is_show_modal());
    assert!(!doc.is_scroll_locked());

    // Owner advances.
    let next = work.carousel().right_button_id();
    work.dispatch_click(next);
    assert_eq!(triplet(work.carousel()), owned(("A", "B", "C")));

    // Opening again captures the new index.
    let center = work.carousel().center_id();
    work.dispatch_click(center);
    assert_eq!(work.carousel().current_image(), "B-modal");
}

#[test]
fn parent_removal_restores_scroll() {
    let doc = Document::new();
    let mut work = WorkSection::new("Work", banners(), &doc, &SiteConfig::default());
    let center = work.carousel().center_id();
    work.dispatch_click(center);
    assert!(doc.is_scroll_locked());

    drop(work);
    assert!(!doc.is_scroll_locked());
}

#[test]
fn two_carousels_share_one_index() {
    let doc = Document::new();
    let config = SiteConfig::default();
    let index = SharedIndex::new(4).unwrap();

    let mut top = Carousel::new(CarouselProps::new(banners()).follow(&index), &doc, &config);
    let mut bottom = Carousel::new(CarouselProps::new(banners()).follow(&index), &doc, &config);

    let next = top.right_button_id();
    top.dispatch_click(next);
    top.set_props(top.props().clone().follow(&index));
    bottom.set_props(bottom.props().clone().follow(&index));

    assert_eq!(triplet(&top), owned(("A", "B", "C")));
    assert_eq!(triplet(&bottom), owned(("A", "B", "C")));
}

#[test]
fn rendered_section_tracks_navigation() {
    let doc = Document::new();
    let mut work = WorkSection::new("Work", banners(), &doc, &SiteConfig::default());
    let prev = work.carousel().left_button_id();
    work.dispatch_click(prev);

    let html = work.render().into_string();
    let c = html.find(r#"src="C""#).unwrap();
    let d = html.find(r#"src="D""#).unwrap();
    let a = html.find(r#"src="A""#).unwrap();
    assert!(c < d && d < a);
    assert!(html.contains(r#"aria-label="4 / 4""#));
}
