//! Banner sequences: the ordered image references a carousel cycles through.
//!
//! A carousel reads two collections by the same index: the display
//! sequence shown in its three panes, and the enlarged sequence shown in
//! the modal. They stay separate types inside a [`BannerSet`], which only
//! exists when both are non-empty and the same length. That makes every
//! index the carousel can produce valid for both.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BannerError {
    #[error("banner sequence must not be empty")]
    Empty,
    #[error("display and enlarged banners differ in length ({display} vs {enlarged})")]
    LengthMismatch { display: usize, enlarged: usize },
    #[error("{captions} captions given for {banners} banners")]
    CaptionMismatch { banners: usize, captions: usize },
}

/// A non-empty, ordered sequence of image references.
///
/// Lookups through [`at`](Self::at) wrap modulo the length and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSequence(Vec<String>);

impl BannerSequence {
    pub fn new(items: Vec<String>) -> Result<Self, BannerError> {
        if items.is_empty() {
            return Err(BannerError::Empty);
        }
        Ok(Self(items))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact lookup, `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Wrapping lookup: `index` is reduced modulo the length first.
    pub fn at(&self, index: usize) -> &str {
        &self.0[index % self.len()]
    }

    /// Index before `index`, wrapping from 0 to the last banner.
    pub fn previous_index(&self, index: usize) -> usize {
        let n = self.len();
        (index % n + n - 1) % n
    }

    /// Index after `index`, wrapping from the last banner to 0.
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.len() + 1) % self.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for BannerSequence {
    type Error = BannerError;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

/// Display banners paired with their enlarged counterparts, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSet {
    display: BannerSequence,
    enlarged: BannerSequence,
    captions: Option<Vec<String>>,
}

impl BannerSet {
    pub fn new(display: BannerSequence, enlarged: BannerSequence) -> Result<Self, BannerError> {
        if display.len() != enlarged.len() {
            return Err(BannerError::LengthMismatch {
                display: display.len(),
                enlarged: enlarged.len(),
            });
        }
        Ok(Self {
            display,
            enlarged,
            captions: None,
        })
    }

    /// Build from two plain lists, validating both.
    pub fn from_lists(display: Vec<String>, enlarged: Vec<String>) -> Result<Self, BannerError> {
        Self::new(BannerSequence::new(display)?, BannerSequence::new(enlarged)?)
    }

    /// Attach one caption per banner. An empty list clears captions.
    pub fn with_captions(mut self, captions: Vec<String>) -> Result<Self, BannerError> {
        if captions.is_empty() {
            self.captions = None;
            return Ok(self);
        }
        if captions.len() != self.len() {
            return Err(BannerError::CaptionMismatch {
                banners: self.len(),
                captions: captions.len(),
            });
        }
        self.captions = Some(captions);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn display(&self) -> &BannerSequence {
        &self.display
    }

    pub fn enlarged(&self) -> &BannerSequence {
        &self.enlarged
    }

    pub fn caption(&self, index: usize) -> Option<&str> {
        self.captions
            .as_ref()
            .map(|c| c[index % c.len()].as_str())
    }
}
