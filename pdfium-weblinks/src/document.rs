//! PDF documents and pages

use crate::error::{PdfError, Result};
use crate::text::PdfPageText;
use pdfium_sys::*;
use std::rc::Rc;

struct PdfDocumentInner {
    handle: FPDF_DOCUMENT,
    // Backing buffer for documents loaded from memory. Must outlive `handle`.
    _data: Option<Vec<u8>>,
}

impl Drop for PdfDocumentInner {
    fn drop(&mut self) {
        unsafe {
            FPDF_CloseDocument(self.handle);
        }
    }
}

/// An open PDF document.
///
/// Pages keep the document alive, so a page may outlive the `PdfDocument`
/// value it was loaded from.
pub struct PdfDocument {
    inner: Rc<PdfDocumentInner>,
}

impl PdfDocument {
    pub(crate) fn from_raw(handle: FPDF_DOCUMENT, data: Option<Vec<u8>>) -> Self {
        Self {
            inner: Rc::new(PdfDocumentInner {
                handle,
                _data: data,
            }),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        let count = unsafe { FPDF_GetPageCount(self.inner.handle) };
        usize::try_from(count).unwrap_or(0)
    }

    /// Get a page by index (0-based).
    pub fn page(&self, index: usize) -> Result<PdfPage> {
        let count = self.page_count();
        if index >= count {
            return Err(PdfError::PageIndexOutOfBounds { index, count });
        }

        let page = unsafe { FPDF_LoadPage(self.inner.handle, index as i32) };
        if page.is_null() {
            return Err(PdfError::PageLoadFailed { index });
        }

        Ok(PdfPage {
            inner: Rc::new(PdfPageInner {
                handle: page,
                index,
                _doc: self.inner.clone(),
            }),
        })
    }

    /// Get an iterator over all pages in the document.
    ///
    /// Pages that fail to load are yielded as errors.
    pub fn pages(&self) -> impl Iterator<Item = Result<PdfPage>> + '_ {
        (0..self.page_count()).map(move |index| self.page(index))
    }
}

pub(crate) struct PdfPageInner {
    handle: FPDF_PAGE,
    index: usize,
    _doc: Rc<PdfDocumentInner>,
}

impl Drop for PdfPageInner {
    fn drop(&mut self) {
        unsafe {
            FPDF_ClosePage(self.handle);
        }
    }
}

/// A single page of a PDF document.
///
/// Text pages loaded from it keep the page open.
pub struct PdfPage {
    inner: Rc<PdfPageInner>,
}

impl PdfPage {
    /// Get the page index (0-based).
    pub fn index(&self) -> usize {
        self.inner.index
    }

    /// Load the text layer of the page.
    ///
    /// The returned text page is the factory for [`crate::PdfWebLinks`].
    pub fn text(&self) -> Result<PdfPageText> {
        let text_page = unsafe { FPDFText_LoadPage(self.inner.handle) };
        if text_page.is_null() {
            return Err(PdfError::TextExtractionFailed {
                reason: format!("Failed to load text page {}", self.inner.index),
            });
        }
        Ok(PdfPageText::new(text_page, self.inner.clone()))
    }
}
