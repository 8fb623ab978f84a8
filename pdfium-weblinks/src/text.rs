//! Text layer of a PDF page

use crate::document::PdfPageInner;
use crate::engine::{PdfRect, TextMatch, TextPageSearch};
use crate::error::{PdfError, Result};
use crate::link::PdfWebLinks;
use crate::pdfium::{Pdfium, PdfiumLinkList};
use crate::search::{PdfSearchOptions, PdfTextSearch};
use libc::c_int;
use pdfium_sys::*;
use std::rc::Rc;

/// Text content of a PDF page.
///
/// Searches the page text, maps character spans to rectangles and loads the
/// page's web links.
pub struct PdfPageText {
    handle: FPDF_TEXTPAGE,
    _page: Rc<PdfPageInner>,
}

impl PdfPageText {
    pub(crate) fn new(handle: FPDF_TEXTPAGE, page: Rc<PdfPageInner>) -> Self {
        Self {
            handle,
            _page: page,
        }
    }

    /// Get the number of characters on the page.
    pub fn char_count(&self) -> usize {
        let count = unsafe { FPDFText_CountChars(self.handle) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Get text from a specific range of character indices.
    ///
    /// The range is clamped to the page; a `start` past the last character
    /// yields an empty string.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting character index (inclusive)
    /// * `count` - Number of characters to extract
    pub fn range(&self, start: usize, count: usize) -> String {
        let available = self.char_count().saturating_sub(start);
        let count = count.min(available);
        if count == 0 {
            return String::new();
        }

        let (Ok(c_start), Ok(c_count)) = (c_int::try_from(start), c_int::try_from(count)) else {
            return String::new();
        };

        // UTF-16 output plus null terminator
        let mut buffer: Vec<u16> = vec![0; count + 1];
        let written =
            unsafe { FPDFText_GetText(self.handle, c_start, c_count, buffer.as_mut_ptr()) };
        if written <= 0 {
            return String::new();
        }
        buffer.truncate(written as usize);

        while buffer.last() == Some(&0) {
            buffer.pop();
        }

        String::from_utf16_lossy(&buffer)
    }

    /// Get all text from the page as a string.
    pub fn all(&self) -> String {
        self.range(0, self.char_count())
    }

    /// Start a search for `pattern`.
    ///
    /// The returned handle yields match spans and is closed when dropped.
    pub fn find(&self, pattern: &str, options: PdfSearchOptions) -> Result<PdfTextSearch<'_>> {
        PdfTextSearch::new(self.handle, pattern, options)
    }

    /// Detect the web links on this page.
    ///
    /// The returned collection borrows both `pdfium` and this text page, so it
    /// is released before the text page closes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdfium_weblinks::Pdfium;
    ///
    /// let pdfium = Pdfium::new()?;
    /// let doc = pdfium.load_pdf_from_file("document.pdf", None)?;
    /// let text = doc.page(0)?.text()?;
    ///
    /// let links = text.load_web_links(&pdfium)?;
    /// for link in links.links(&text)? {
    ///     println!("URL: {}", link.url);
    ///     for rect in &link.rects {
    ///         println!("  at ({:.1}, {:.1}) - ({:.1}, {:.1})",
    ///             rect.left, rect.bottom, rect.right, rect.top);
    ///     }
    /// }
    /// # Ok::<(), pdfium_weblinks::PdfError>(())
    /// ```
    pub fn load_web_links<'a>(&'a self, pdfium: &'a Pdfium) -> Result<PdfWebLinks<'a, Pdfium>> {
        let handle = unsafe { FPDFLink_LoadWebLinks(self.handle) };
        if handle.is_null() {
            return Err(PdfError::LinkExtractionFailed {
                reason: "Failed to load web links".to_string(),
            });
        }
        Ok(PdfWebLinks::new(pdfium, PdfiumLinkList::new(handle)))
    }
}

impl TextPageSearch for PdfPageText {
    fn search(&self, query: &str, options: PdfSearchOptions) -> Result<Vec<TextMatch>> {
        Ok(self.find(query, options)?.collect())
    }

    fn text_rects(&self, start_index: usize, count: usize) -> Result<Vec<PdfRect>> {
        let (c_start, c_count) = match (c_int::try_from(start_index), c_int::try_from(count)) {
            (Ok(start), Ok(count)) => (start, count),
            _ => {
                return Err(PdfError::TextExtractionFailed {
                    reason: format!(
                        "Span of {} chars at {} exceeds the native range",
                        count, start_index
                    ),
                })
            }
        };

        let rect_count = unsafe { FPDFText_CountRects(self.handle, c_start, c_count) };
        if rect_count < 0 {
            return Err(PdfError::TextExtractionFailed {
                reason: format!(
                    "Failed to count rectangles for {} chars at {}",
                    count, start_index
                ),
            });
        }

        let mut rects = Vec::with_capacity(rect_count as usize);
        for i in 0..rect_count {
            let mut left = 0.0f64;
            let mut top = 0.0f64;
            let mut right = 0.0f64;
            let mut bottom = 0.0f64;

            let success = unsafe {
                FPDFText_GetRect(self.handle, i, &mut left, &mut top, &mut right, &mut bottom)
            };

            if success != 0 {
                rects.push(PdfRect::new(left, top, right, bottom));
            }
        }
        Ok(rects)
    }
}

impl Drop for PdfPageText {
    fn drop(&mut self) {
        unsafe {
            FPDFText_ClosePage(self.handle);
        }
    }
}
