//! Dot indicator under the centered banner.

use maud::{Markup, Render, html};

/// One dot per banner, the dot at `current_banner_index` marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselPointer {
    pub current_banner_index: usize,
    pub length: usize,
}

impl CarouselPointer {
    pub fn new(current_banner_index: usize, length: usize) -> Self {
        Self {
            current_banner_index,
            length,
        }
    }

    /// Position of the active dot, `None` for an empty carousel.
    pub fn active(&self) -> Option<usize> {
        (self.length > 0).then(|| self.current_banner_index % self.length)
    }

    /// Accessible position label, e.g. `"2 / 4"`.
    pub fn label(&self) -> String {
        match self.active() {
            Some(active) => format!("{} / {}", active + 1, self.length),
            None => String::new(),
        }
    }
}

impl Render for CarouselPointer {
    fn render(&self) -> Markup {
        let Some(active) = self.active() else {
            return html! {};
        };
        html! {
            div.carousel-pointer role="img" aria-label=(self.label()) {
                @for i in 0..self.length {
                    span.pointer-dot.active[i == active] {}
                }
            }
        }
    }
}
