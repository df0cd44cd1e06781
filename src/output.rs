//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Check
//!
//! ```text
//! Work (3 banners)
//! 001 work/01.png
//!     Enlarged: work/01-large.png
//!     Caption: Brand refresh
//! 002 work/02.png
//!     Enlarged: work/02-large.png
//! ```
//!
//! ## Build
//!
//! ```text
//! Work (3 banners) → dist/index.html
//! Wrote 14.2 KB
//! ```

use serde::Serialize;

use crate::data::WorkData;
use crate::generate::GenerateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn banner_count(n: usize) -> String {
    if n == 1 {
        "1 banner".to_string()
    } else {
        format!("{n} banners")
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

// ============================================================================
// check
// ============================================================================

/// Banner inventory: one entry per banner with its enlarged image and caption.
pub fn format_check_output(work: &WorkData) -> Vec<String> {
    let banners = &work.banners;
    let mut lines = vec![format!("{} ({})", work.title, banner_count(banners.len()))];
    for (i, display) in banners.display().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), display));
        lines.push(format!(
            "{}Enlarged: {}",
            indent(1),
            banners.enlarged().at(i)
        ));
        if let Some(caption) = banners.caption(i).filter(|c| !c.is_empty()) {
            lines.push(format!("{}Caption: {}", indent(1), caption));
        }
    }
    lines
}

pub fn print_check_output(work: &WorkData) {
    for line in format_check_output(work) {
        println!("{}", line);
    }
}

#[derive(Serialize)]
struct InventoryEntry<'a> {
    position: usize,
    thumbnail: &'a str,
    enlarged: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
}

#[derive(Serialize)]
struct Inventory<'a> {
    title: &'a str,
    banners: Vec<InventoryEntry<'a>>,
}

/// The same inventory as JSON, for scripting.
pub fn format_check_json(work: &WorkData) -> serde_json::Result<String> {
    let banners = &work.banners;
    let inventory = Inventory {
        title: &work.title,
        banners: banners
            .display()
            .iter()
            .enumerate()
            .map(|(i, thumbnail)| InventoryEntry {
                position: i + 1,
                thumbnail,
                enlarged: banners.enlarged().at(i),
                caption: banners.caption(i),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&inventory)
}

// ============================================================================
// build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    vec![
        format!(
            "{} ({}) → {}",
            report.title,
            banner_count(report.banners),
            report.page.display()
        ),
        format!("Wrote {}", format_size(report.bytes)),
    ]
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
