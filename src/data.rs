//! Banner data files.
//!
//! A data file lists the carousel's display images and their enlarged
//! counterparts as two separate, index-aligned arrays:
//!
//! ```toml
//! title = "Work"
//! thumbnails = ["work/01.png", "work/02.png"]
//! enlarged = ["work/01-large.png", "work/02-large.png"]
//! captions = ["Brand refresh", "*Annual* report"]   # optional, Markdown
//! ```
//!
//! Image references are opaque: they are written into the page as-is and
//! never resolved or checked on disk.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::banners::{BannerError, BannerSet};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid banners: {0}")]
    Banners(#[from] BannerError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BannerFile {
    #[serde(default = "default_title")]
    title: String,
    thumbnails: Vec<String>,
    enlarged: Vec<String>,
    #[serde(default)]
    captions: Vec<String>,
}

fn default_title() -> String {
    "Work".to_string()
}

/// A validated banner data file.
#[derive(Debug, Clone)]
pub struct WorkData {
    pub title: String,
    pub banners: BannerSet,
}

/// Parse and validate banner data from TOML text.
pub fn parse_banners(source: &str) -> Result<WorkData, DataError> {
    let file: BannerFile = toml::from_str(source)?;
    let banners =
        BannerSet::from_lists(file.thumbnails, file.enlarged)?.with_captions(file.captions)?;
    Ok(WorkData {
        title: file.title,
        banners,
    })
}

/// Load and validate a banner data file.
pub fn load_banners(path: &Path) -> Result<WorkData, DataError> {
    let content = fs::read_to_string(path)?;
    parse_banners(&content)
}
