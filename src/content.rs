//! Text or pre-rendered content for modal titles and bodies.

use maud::{Markup, PreEscaped, Render, html};
use pulldown_cmark::{Parser, html as md_html};

/// What a modal shows in its title or body slot.
///
/// Plain text is escaped when rendered. Rich content is trusted markup,
/// either built with `maud::html!` by the caller or converted from Markdown.
#[derive(Debug, Clone)]
pub enum Content {
    Text(String),
    Rich(Markup),
}

impl Content {
    /// Convert a Markdown body to rich content. Banner captions go through
    /// here; the source is trusted, so raw HTML in it is kept.
    pub fn markdown(source: &str) -> Self {
        let parser = Parser::new(source);
        let mut body_html = String::new();
        md_html::push_html(&mut body_html, parser);
        Content::Rich(PreEscaped(body_html))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Rich(markup) => markup.0.is_empty(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl Render for Content {
    fn render(&self) -> Markup {
        match self {
            Content::Text(text) => html! { (text) },
            Content::Rich(markup) => markup.clone(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Rich(markup)
    }
}
