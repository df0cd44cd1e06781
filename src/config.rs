//! Component configuration.
//!
//! Loads an optional `config.toml`, fills missing keys with stock
//! defaults, and validates the result. The values end up as CSS custom properties in the
//! rendered page and as the offsets/sizes components write inline.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [modal]
//! floating_offset = 50      # Top offset of floating panels (px)
//! padding = 40              # Inner padding of the content area (px)
//! image_width = 700         # Image section size (px)
//! image_height = 350
//! backdrop_blur = "5px"
//!
//! [carousel]
//! image_width = 1060        # Size of each of the three panes (px)
//! image_height = 370
//! gap = 20                  # Space between panes (px)
//! button_width = 50         # Width of the prev/next strips (px)
//!
//! [colors]
//! white = "#ffffff"         # Modal panel background
//! yellow = "#ffd23f"        # Hover outline of the centered image
//! backdrop = "rgba(0, 0, 0, 0.5)"
//! ```
//!
//! Config files are sparse: override just the keys you need. Unknown keys
//! are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Modal overlay and panel settings.
    pub modal: ModalConfig,
    /// Carousel pane and button sizes.
    pub carousel: CarouselConfig,
    /// Colors used by both components.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("modal.image_width", self.modal.image_width),
            ("modal.image_height", self.modal.image_height),
            ("carousel.image_width", self.carousel.image_width),
            ("carousel.image_height", self.carousel.image_height),
            ("carousel.button_width", self.carousel.button_width),
        ];
        for (key, value) in dimensions {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{key} must be non-zero")));
            }
        }
        if self.colors.white.is_empty() || self.colors.yellow.is_empty() {
            return Err(ConfigError::Validation(
                "colors must not be empty strings".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalConfig {
    /// Distance from the top of the overlay to a floating panel (px).
    pub floating_offset: u32,
    /// Padding around title and content (px).
    pub padding: u32,
    /// Width of the image section (px). The carousel's enlarged-image modal
    /// uses this as its panel width.
    pub image_width: u32,
    /// Height of the image section (px).
    pub image_height: u32,
    /// Backdrop blur radius (CSS length).
    pub backdrop_blur: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            floating_offset: 50,
            padding: 40,
            image_width: 700,
            image_height: 350,
            backdrop_blur: "5px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Gap between the three panes (px).
    pub gap: u32,
    pub button_width: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_width: 1060,
            image_height: 370,
            gap: 20,
            button_width: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Modal panel background.
    pub white: String,
    /// Outline shown when hovering the centered image.
    pub yellow: String,
    /// Dimmed overlay behind modals and under the carousel buttons.
    pub backdrop: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            white: "#ffffff".to_string(),
            yellow: "#ffd23f".to_string(),
            backdrop: "rgba(0, 0, 0, 0.5)".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in `dir`, falling back to stock defaults.
///
/// Keys missing from the file keep their defaults, so a config file only
/// needs the values it changes.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A fully commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Carousel Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Modal
# ---------------------------------------------------------------------------
[modal]
# Distance from the top of the page to a floating modal panel (px).
floating_offset = 50

# Padding around the title and body (px).
padding = 40

# Size of the image section (px). The enlarged-image modal opened from the
# carousel is exactly this wide.
image_width = 700
image_height = 350

# Blur applied to the page behind the overlay (CSS length).
backdrop_blur = "5px"

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
[carousel]
# Size of each pane (px). Three panes are laid out side by side and the
# outer two are clipped by the viewport.
image_width = 1060
image_height = 370

# Space between panes (px).
gap = 20

# Width of the previous/next strips on each edge (px).
button_width = 50

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
white = "#ffffff"                 # Modal panel background
yellow = "#ffd23f"                # Hover outline on the centered image
backdrop = "rgba(0, 0, 0, 0.5)"   # Overlay and button strips
"##
}

/// CSS custom properties for the configured colors.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --white: {white};
    --yellow: {yellow};
    --backdrop: {backdrop};
}}"#,
        white = colors.white,
        yellow = colors.yellow,
        backdrop = colors.backdrop,
    )
}

/// CSS custom properties for component dimensions.
pub fn generate_layout_css(config: &SiteConfig) -> String {
    format!(
        r#":root {{
    --carousel-image-width: {cw}px;
    --carousel-image-height: {ch}px;
    --carousel-gap: {gap}px;
    --carousel-button-width: {bw}px;
    --modal-padding: {padding}px;
    --modal-image-width: {mw}px;
    --modal-image-height: {mh}px;
    --modal-backdrop-blur: {blur};
}}"#,
        cw = config.carousel.image_width,
        ch = config.carousel.image_height,
        gap = config.carousel.gap,
        bw = config.carousel.button_width,
        padding = config.modal.padding,
        mw = config.modal.image_width,
        mh = config.modal.image_height,
        blur = config.modal.backdrop_blur,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_dimensions() {
        let config = SiteConfig::default();
        assert_eq!(config.modal.floating_offset, 50);
        assert_eq!(config.modal.image_width, 700);
        assert_eq!(config.carousel.image_width, 1060);
        assert_eq!(config.carousel.image_height, 370);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
yellow = "#f5c400"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.yellow, "#f5c400");
        assert_eq!(config.colors.white, "#ffffff");
        assert_eq!(config.carousel.gap, 20);
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r#"
[carousel]
image_widht = 900
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn zero_dimension_fails_validation() {
        let mut config = SiteConfig::default();
        config.carousel.image_height = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("carousel.image_height"));
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[modal]\npadding = 24\n").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.modal.padding, 24);
        assert_eq!(config.modal.floating_offset, 50);
        assert_eq!(config.modal.backdrop_blur, "5px");
        assert_eq!(config.carousel.image_width, 1060);
        assert_eq!(config.colors.yellow, "#ffd23f");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.modal.padding, 40);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[carousel]\nimage_width = 800\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.carousel.image_width, 800);
        assert_eq!(config.carousel.image_height, 370);
    }

    #[test]
    fn load_config_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[modal\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[modal]\nimage_width = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.modal.image_width, defaults.modal.image_width);
        assert_eq!(config.carousel.button_width, defaults.carousel.button_width);
        assert_eq!(config.colors.backdrop, defaults.colors.backdrop);
    }

    #[test]
    fn color_css_uses_config() {
        let mut colors = ColorConfig::default();
        colors.yellow = "#abcdef".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--yellow: #abcdef"));
        assert!(css.contains("--white: #ffffff"));
    }

    #[test]
    fn layout_css_has_pixel_units() {
        let css = generate_layout_css(&SiteConfig::default());
        assert!(css.contains("--carousel-image-width: 1060px"));
        assert!(css.contains("--modal-image-height: 350px"));
        assert!(css.contains("--modal-backdrop-blur: 5px"));
    }
}
