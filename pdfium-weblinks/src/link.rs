//! Web links detected on a text page.
//!
//! [`PdfWebLinks`] owns one native link list. The list is released exactly
//! once, either by [`PdfWebLinks::close`] or when the value is dropped, and
//! every read after release fails with [`PdfError::AlreadyClosed`].
//!
//! PDFium detects web links by scanning page text for URL-like strings. The
//! link geometry returned by [`PdfWebLinks::rects`] is reconstructed by
//! searching the page text for the URL again. This assumes the rendered link
//! text equals the URL and is not repeated elsewhere on the page: a URL that
//! also appears in plain text yields the rectangles of every occurrence.

use crate::engine::{PdfRect, TextPageSearch, WebLinkEngine};
use crate::error::{PdfError, Result};
use crate::search::PdfSearchOptions;
use std::fmt;

const RESOURCE: &str = "WebLinks";

/// Snapshot of a single web link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfWebLink {
    /// Index of the link within its page.
    pub index: usize,
    /// The URL of the link.
    pub url: String,
    /// The bounding rectangles of the link text (may span multiple lines).
    pub rects: Vec<PdfRect>,
}

enum LinksState<H> {
    Open(H),
    Closed,
}

/// Web links of one text page.
///
/// Created by a page-level factory such as `PdfPageText::load_web_links`.
/// The engine is borrowed, the link list is owned.
///
/// # Example
///
/// ```no_run
/// # #[cfg(feature = "pdfium")]
/// # fn main() -> pdfium_weblinks::Result<()> {
/// use pdfium_weblinks::Pdfium;
///
/// let pdfium = Pdfium::new()?;
/// let doc = pdfium.load_pdf_from_file("document.pdf", None)?;
/// let text = doc.page(0)?.text()?;
///
/// let mut links = text.load_web_links(&pdfium)?;
/// for index in 0..links.count()? {
///     println!("{} -> {:?}", links.url(index)?, links.rects(index, &text)?);
/// }
/// links.close();
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "pdfium"))]
/// # fn main() {}
/// ```
pub struct PdfWebLinks<'e, E: WebLinkEngine> {
    engine: &'e E,
    state: LinksState<E::Handle>,
}

impl<'e, E: WebLinkEngine> PdfWebLinks<'e, E> {
    /// Take ownership of a native link list produced by `engine`.
    pub(crate) fn new(engine: &'e E, handle: E::Handle) -> Self {
        log::debug!("Opened web link list");
        Self {
            engine,
            state: LinksState::Open(handle),
        }
    }

    /// Wrap a link list obtained directly from `engine`.
    ///
    /// # Safety
    ///
    /// `handle` must be a live link list produced by `engine` and owned by no
    /// other value: the returned collection releases it through
    /// [`WebLinkEngine::close_web_links`] on close or drop, and nothing else
    /// may release it.
    ///
    /// # Example
    ///
    /// ```
    /// use pdfium_weblinks::{PdfWebLinks, Result, WebLinkEngine};
    ///
    /// struct Engine;
    ///
    /// impl WebLinkEngine for Engine {
    ///     type Handle = u32;
    ///     fn count_web_links(&self, _: u32) -> Result<i32> { Ok(0) }
    ///     fn web_link_url(&self, _: u32, _: usize) -> Result<String> { Ok(String::new()) }
    ///     fn close_web_links(&self, _: u32) {}
    /// }
    ///
    /// // SAFETY: handle 7 is not wrapped anywhere else.
    /// let links = unsafe { PdfWebLinks::from_raw(&Engine, 7) };
    /// assert_eq!(links.count().unwrap(), 0);
    /// ```
    ///
    /// Without `unsafe` the call is rejected:
    ///
    /// ```compile_fail
    /// use pdfium_weblinks::{PdfWebLinks, Result, WebLinkEngine};
    ///
    /// struct Engine;
    ///
    /// impl WebLinkEngine for Engine {
    ///     type Handle = u32;
    ///     fn count_web_links(&self, _: u32) -> Result<i32> { Ok(0) }
    ///     fn web_link_url(&self, _: u32, _: usize) -> Result<String> { Ok(String::new()) }
    ///     fn close_web_links(&self, _: u32) {}
    /// }
    ///
    /// let links = PdfWebLinks::from_raw(&Engine, 7);
    /// ```
    pub unsafe fn from_raw(engine: &'e E, handle: E::Handle) -> Self {
        Self::new(engine, handle)
    }

    fn handle(&self) -> Result<E::Handle> {
        match self.state {
            LinksState::Open(handle) => Ok(handle),
            LinksState::Closed => Err(PdfError::AlreadyClosed { resource: RESOURCE }),
        }
    }

    /// Whether the native link list has been released.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, LinksState::Closed)
    }

    /// Get the number of web links on the page.
    pub fn count(&self) -> Result<usize> {
        let handle = self.handle()?;
        let count = self.engine.count_web_links(handle)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Get the URL of the link at `index`.
    ///
    /// Indices at or beyond [`Self::count`] are rejected with
    /// [`PdfError::LinkIndexOutOfBounds`] before reaching the engine.
    pub fn url(&self, index: usize) -> Result<String> {
        let handle = self.handle()?;
        let count = self.count()?;
        if index >= count {
            return Err(PdfError::LinkIndexOutOfBounds { index, count });
        }
        self.engine.web_link_url(handle, index)
    }

    /// Get the on-page rectangles of the link at `index`.
    ///
    /// Searches `text_page` for the link's URL (case-insensitive, substring)
    /// and collects the text rectangles of every match, in match order. An
    /// empty URL has no bounds and yields an empty vector without searching.
    pub fn rects<T>(&self, index: usize, text_page: &T) -> Result<Vec<PdfRect>>
    where
        T: TextPageSearch + ?Sized,
    {
        let url = self.url(index)?;
        locate_url(&url, text_page)
    }

    /// Get the URL and rectangles of the link at `index`.
    pub fn link<T>(&self, index: usize, text_page: &T) -> Result<PdfWebLink>
    where
        T: TextPageSearch + ?Sized,
    {
        let url = self.url(index)?;
        let rects = locate_url(&url, text_page)?;
        Ok(PdfWebLink { index, url, rects })
    }

    /// Get every link on the page with its rectangles.
    pub fn links<T>(&self, text_page: &T) -> Result<Vec<PdfWebLink>>
    where
        T: TextPageSearch + ?Sized,
    {
        (0..self.count()?)
            .map(|index| self.link(index, text_page))
            .collect()
    }

    /// Get every URL on the page, in index order.
    pub fn urls(&self) -> Result<Vec<String>> {
        (0..self.count()?).map(|index| self.url(index)).collect()
    }

    /// Release the native link list.
    ///
    /// Only the first call reaches the engine; later calls do nothing.
    pub fn close(&mut self) {
        if let LinksState::Open(handle) = std::mem::replace(&mut self.state, LinksState::Closed) {
            self.engine.close_web_links(handle);
            log::debug!("Closed web link list");
        }
    }
}

fn locate_url<T>(url: &str, text_page: &T) -> Result<Vec<PdfRect>>
where
    T: TextPageSearch + ?Sized,
{
    if url.is_empty() {
        return Ok(Vec::new());
    }

    let matches = text_page.search(url, PdfSearchOptions::new())?;
    log::trace!("URL {} matched {} times on page", url, matches.len());

    let mut rects = Vec::new();
    for span in matches {
        rects.extend(text_page.text_rects(span.start_index, span.count)?);
    }
    Ok(rects)
}

impl<E: WebLinkEngine> Drop for PdfWebLinks<'_, E> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<E: WebLinkEngine> fmt::Debug for PdfWebLinks<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfWebLinks")
            .field("closed", &self.is_closed())
            .finish()
    }
}
