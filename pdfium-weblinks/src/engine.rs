//! Boundaries to the native engine.
//!
//! [`WebLinkEngine`] is the slice of PDFium that owns link lists, and
//! [`TextPageSearch`] is the slice of a text page that the rectangle lookup
//! needs. The PDFium backend implements both; tests drive them with mocks.

use crate::error::Result;
use crate::search::PdfSearchOptions;

/// A rectangle in page coordinates (points, origin at the bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfRect {
    /// Left edge in page coordinates.
    pub left: f64,
    /// Top edge in page coordinates.
    pub top: f64,
    /// Right edge in page coordinates.
    pub right: f64,
    /// Bottom edge in page coordinates.
    pub bottom: f64,
}

impl PdfRect {
    /// Create a rectangle from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// A located substring of a text page: `count` characters from `start_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMatch {
    /// Index of the first matched character.
    pub start_index: usize,
    /// Number of matched characters.
    pub count: usize,
}

impl TextMatch {
    /// Create a span of `count` characters starting at `start_index`.
    pub fn new(start_index: usize, count: usize) -> Self {
        Self { start_index, count }
    }
}

/// Native calls behind a web link list.
///
/// Handles are produced by a page-level factory (for PDFium,
/// `PdfPageText::load_web_links`) and handed to [`crate::PdfWebLinks`], which
/// owns them until [`WebLinkEngine::close_web_links`] is called exactly once.
pub trait WebLinkEngine {
    /// Opaque token for one native link list.
    type Handle: Copy;

    /// Number of web links in the list. Negative values signal a native failure.
    fn count_web_links(&self, handle: Self::Handle) -> Result<i32>;

    /// URL of the link at `index`. May be empty.
    fn web_link_url(&self, handle: Self::Handle, index: usize) -> Result<String>;

    /// Release the native link list.
    fn close_web_links(&self, handle: Self::Handle);
}

/// Text lookup on a single page.
pub trait TextPageSearch {
    /// All occurrences of `query`, in page order.
    fn search(&self, query: &str, options: PdfSearchOptions) -> Result<Vec<TextMatch>>;

    /// Rectangles covering `count` characters from `start_index`, in reading order.
    ///
    /// A single span can produce several rectangles, e.g. when it wraps a line.
    fn text_rects(&self, start_index: usize, count: usize) -> Result<Vec<PdfRect>>;
}
