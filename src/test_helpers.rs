//! Shared test utilities.
//!
//! Banner fixtures follow one naming rule: the enlarged counterpart of a
//! display banner gets `-large` before its extension (`A` → `A-large`,
//! `a.png` → `a-large.png`), so assertions can tell the two sequences apart.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::banners::BannerSet;
use crate::callback::Callback;

/// Owned strings from literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The enlarged image name for a display banner.
pub fn enlarged_name(banner: &str) -> String {
    match banner.rfind('.') {
        Some(dot) => format!("{}-large{}", &banner[..dot], &banner[dot..]),
        None => format!("{banner}-large"),
    }
}

/// A banner set whose enlarged sequence mirrors `display` with `-large` names.
pub fn banner_set(display: &[&str]) -> BannerSet {
    let enlarged = display.iter().map(|b| enlarged_name(b)).collect();
    BannerSet::from_lists(strings(display), enlarged).unwrap()
}

/// A callback plus a counter of how often it fired.
pub fn counting_callback() -> (Callback, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let callback = Callback::new(move || counter.set(counter.get() + 1));
    (callback, hits)
}

/// Write `dir/banners.toml` for `display`, enlarged names per [`enlarged_name`].
pub fn write_data_file(dir: &Path, display: &[&str]) -> PathBuf {
    let quote = |items: Vec<String>| {
        items
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let enlarged = display.iter().map(|b| enlarged_name(b)).collect();
    let body = format!(
        "thumbnails = [{}]\nenlarged = [{}]\n",
        quote(strings(display)),
        quote(enlarged)
    );
    let path = dir.join("banners.toml");
    fs::write(&path, body).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enlarged_name_inserts_before_extension() {
        assert_eq!(enlarged_name("work/01.png"), "work/01-large.png");
        assert_eq!(enlarged_name("A"), "A-large");
    }
}
