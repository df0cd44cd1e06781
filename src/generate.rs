//! Standalone Work page generation.
//!
//! Renders a banner data file into a single `index.html`: the carousel
//! section rendered server-side, a `<template>` holding the enlarged-image
//! modal, and a small script that repeats the same behavior in the browser
//! (owner-side index arithmetic, center click opens the modal, background
//! or close button removes it, body overflow hidden while it shows).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html      # inline CSS and script; image references left as-is
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: component styles, sizes and colors read from CSS
//!   custom properties generated from `config.toml`
//! - `static/carousel.js`: client-side navigation and modal handling

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::callback::Callback;
use crate::config::{self, ConfigError, SiteConfig};
use crate::data::{self, DataError, WorkData};
use crate::dom::Document;
use crate::modal::Modal;
use crate::work::WorkSection;
use crate::work_modal::work_modal;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/carousel.js");

/// What a `generate` run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub page: PathBuf,
    pub title: String,
    pub banners: usize,
    pub bytes: usize,
}

/// Render `data_path` into `output_dir/index.html`.
///
/// `config.toml` is read from `config_dir` when given, otherwise from the
/// data file's directory.
pub fn generate(
    data_path: &Path,
    config_dir: Option<&Path>,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let config_dir = config_dir
        .or_else(|| data_path.parent())
        .unwrap_or_else(|| Path::new("."));
    let site_config = config::load_config(config_dir)?;
    let work = data::load_banners(data_path)?;

    let html = render_page(&work, &site_config).into_string();

    fs::create_dir_all(output_dir)?;
    let page = output_dir.join("index.html");
    fs::write(&page, &html)?;

    Ok(GenerateReport {
        page,
        title: work.title,
        banners: work.banners.len(),
        bytes: html.len(),
    })
}

/// The complete Work page.
pub fn render_page(work: &WorkData, site_config: &SiteConfig) -> Markup {
    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&site_config.colors),
        config::generate_layout_css(site_config),
        CSS_STATIC
    );

    let document = Document::new();
    let mut section = WorkSection::new(&work.title, work.banners.clone(), &document, site_config);

    // Never shown as-is: the script clones it and swaps in the clicked banner.
    let template_document = Document::new();
    let template = Modal::mount(
        work_modal(
            work.banners.enlarged().at(0),
            work.banners.caption(0),
            Callback::noop(),
            &site_config.modal,
        ),
        &template_document,
    );

    let content = html! {
        main.work-page {
            (section.render())
        }
        template #work-modal-template {
            (template.render(&site_config.modal))
        }
        script { (PreEscaped(JS)) }
    };

    base_document(&work.title, &css, content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{banner_set, write_data_file};
    use tempfile::TempDir;

    fn work_data() -> WorkData {
        WorkData {
            title: "Selected Work".to_string(),
            banners: banner_set(&["A", "B", "C"]),
        }
    }

    #[test]
    fn base_document_includes_doctype() {
        let doc = base_document("Test", "body {}", html! { p { "test" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
    }

    #[test]
    fn page_has_carousel_template_and_script() {
        let html = render_page(&work_data(), &SiteConfig::default()).into_string();
        assert!(html.contains("class=\"carousel\""));
        assert!(html.contains("id=\"work-modal-template\""));
        assert!(html.contains("document.body.style.overflow"));
    }

    #[test]
    fn page_carousel_starts_closed() {
        let html = render_page(&work_data(), &SiteConfig::default()).into_string();
        // The only overlay on the page is the one inside the template.
        assert_eq!(html.matches("class=\"modal-overlay floating\"").count(), 1);
    }

    #[test]
    fn page_css_reflects_config() {
        let mut site_config = SiteConfig::default();
        site_config.carousel.image_width = 640;
        site_config.colors.yellow = "#ff0".to_string();
        let html = render_page(&work_data(), &site_config).into_string();
        assert!(html.contains("--carousel-image-width: 640px"));
        assert!(html.contains("--yellow: #ff0"));
    }

    #[test]
    fn page_title_is_escaped() {
        let mut data = work_data();
        data.title = "<b>Work</b>".to_string();
        let html = render_page(&data, &SiteConfig::default()).into_string();
        assert!(html.contains("&lt;b&gt;Work&lt;/b&gt;"));
    }

    #[test]
    fn generate_writes_index() {
        let tmp = TempDir::new().unwrap();
        let data_path = write_data_file(tmp.path(), &["a.png", "b.png"]);
        let out = tmp.path().join("dist");

        let report = generate(&data_path, None, &out).unwrap();
        assert_eq!(report.banners, 2);
        assert_eq!(report.page, out.join("index.html"));
        let html = fs::read_to_string(&report.page).unwrap();
        assert_eq!(html.len(), report.bytes);
        assert!(html.contains("a.png"));
        assert!(html.contains("a-large.png"));
    }

    #[test]
    fn generate_reads_config_next_to_data() {
        let tmp = TempDir::new().unwrap();
        let data_path = write_data_file(tmp.path(), &["a.png"]);
        fs::write(tmp.path().join("config.toml"), "[modal]\nimage_width = 512\n").unwrap();
        let out = tmp.path().join("dist");

        generate(&data_path, None, &out).unwrap();
        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("width: 512px;"));
    }

    #[test]
    fn generate_reports_bad_config() {
        let tmp = TempDir::new().unwrap();
        let data_path = write_data_file(tmp.path(), &["a.png"]);
        fs::write(tmp.path().join("config.toml"), "[modal]\nbogus = 1\n").unwrap();
        let err = generate(&data_path, None, &tmp.path().join("dist")).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn generate_reports_bad_data() {
        let tmp = TempDir::new().unwrap();
        let data_path = tmp.path().join("banners.toml");
        fs::write(&data_path, "thumbnails = [\"a.png\"]\nenlarged = []\n").unwrap();
        let err = generate(&data_path, None, &tmp.path().join("dist")).unwrap_err();
        assert!(matches!(err, GenerateError::Data(_)));
    }
}
