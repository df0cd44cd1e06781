//! The enlarged-image modal a carousel opens from its centered banner.

use crate::callback::Callback;
use crate::config::ModalConfig;
use crate::content::Content;
use crate::modal::ModalProps;

/// Modal props for showing `image` enlarged.
///
/// Floating, as wide as the configured image section, with the banner's
/// caption (if any) rendered from Markdown as its body.
pub fn work_modal(
    image: &str,
    caption: Option<&str>,
    on_close: Callback,
    config: &ModalConfig,
) -> ModalProps {
    let content = caption.map(Content::markdown).unwrap_or_default();
    ModalProps::new(content, on_close)
        .width(config.image_width)
        .image(image)
        .floating(true)
}
