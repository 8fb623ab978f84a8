//! Main PDFium entry point

use crate::document::PdfDocument;
use crate::engine::WebLinkEngine;
use crate::error::{PdfError, Result};
use pdfium_sys::*;
use std::ffi::CString;
use std::path::Path;
use std::sync::Once;

/// Global initialization - ensures FPDF_InitLibrary is called exactly once
/// and all threads wait until it completes.
static INIT: Once = Once::new();

/// Main entry point for PDFium operations.
///
/// Create a single `Pdfium` instance and use it to open PDF documents. It is
/// also the engine binding borrowed by every [`crate::PdfWebLinks`].
///
/// # Example
///
/// ```no_run
/// use pdfium_weblinks::Pdfium;
///
/// let pdfium = Pdfium::new()?;
/// let doc = pdfium.load_pdf_from_file("document.pdf", None)?;
/// # Ok::<(), pdfium_weblinks::PdfError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pdfium {
    _private: (),
}

impl Pdfium {
    /// Create a new Pdfium instance, initializing the library if needed.
    pub fn new() -> Result<Self> {
        INIT.call_once(|| {
            log::debug!("Initializing PDFium");
            unsafe { FPDF_InitLibrary() };
        });
        Ok(Self { _private: () })
    }

    /// Load a PDF document from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the PDF file
    /// * `password` - Optional password for encrypted PDFs
    pub fn load_pdf_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        password: Option<&str>,
    ) -> Result<PdfDocument> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PdfError::FileNotFound(path.display().to_string()));
        }

        let c_path =
            CString::new(path.to_string_lossy().as_bytes()).map_err(|_| PdfError::OpenFailed {
                reason: "Invalid path encoding".to_string(),
            })?;
        let c_password = password_cstring(password)?;
        let password_ptr = c_password
            .as_ref()
            .map(|p| p.as_ptr())
            .unwrap_or(std::ptr::null());

        let doc = unsafe { FPDF_LoadDocument(c_path.as_ptr(), password_ptr) };
        if doc.is_null() {
            return Err(last_error(path));
        }

        log::debug!("Opened {}", path.display());
        Ok(PdfDocument::from_raw(doc, None))
    }

    /// Load a PDF document from bytes, taking ownership of the buffer.
    ///
    /// PDFium reads from the buffer lazily, so the document keeps it alive.
    pub fn load_pdf_from_bytes(&self, data: Vec<u8>, password: Option<&str>) -> Result<PdfDocument> {
        let len = libc::c_int::try_from(data.len()).map_err(|_| PdfError::OpenFailed {
            reason: format!("Buffer of {} bytes is too large", data.len()),
        })?;
        let c_password = password_cstring(password)?;
        let password_ptr = c_password
            .as_ref()
            .map(|p| p.as_ptr())
            .unwrap_or(std::ptr::null());

        let doc = unsafe {
            FPDF_LoadMemDocument(data.as_ptr() as *const std::ffi::c_void, len, password_ptr)
        };
        if doc.is_null() {
            return Err(last_error(Path::new("<memory>")));
        }

        Ok(PdfDocument::from_raw(doc, Some(data)))
    }
}

fn password_cstring(password: Option<&str>) -> Result<Option<CString>> {
    password
        .map(|p| {
            CString::new(p).map_err(|_| PdfError::OpenFailed {
                reason: "Password contains a NUL byte".to_string(),
            })
        })
        .transpose()
}

fn last_error(path: &Path) -> PdfError {
    let error = unsafe { FPDF_GetLastError() };
    match error as u32 {
        FPDF_ERR_PASSWORD => PdfError::InvalidPassword,
        FPDF_ERR_FILE => PdfError::FileNotFound(path.display().to_string()),
        _ => PdfError::OpenFailed {
            reason: format!("PDFium error code: {}", error),
        },
    }
}

/// A PDFium web link list.
///
/// Only `PdfPageText::load_web_links` creates one, and the resulting
/// [`crate::PdfWebLinks`] never hands it out, so the native calls below only
/// ever see live lists owned by a single collection.
#[derive(Debug, Clone, Copy)]
pub struct PdfiumLinkList(FPDF_PAGELINK);

impl PdfiumLinkList {
    pub(crate) fn new(handle: FPDF_PAGELINK) -> Self {
        Self(handle)
    }
}

impl WebLinkEngine for Pdfium {
    type Handle = PdfiumLinkList;

    fn count_web_links(&self, list: PdfiumLinkList) -> Result<i32> {
        Ok(unsafe { FPDFLink_CountWebLinks(list.0) })
    }

    fn web_link_url(&self, list: PdfiumLinkList, index: usize) -> Result<String> {
        let handle = list.0;
        let index = libc::c_int::try_from(index).map_err(|_| PdfError::LinkExtractionFailed {
            reason: format!("Link index {} exceeds the native range", index),
        })?;

        // First call to get buffer size (in UTF-16 units, including the null terminator)
        let size = unsafe { FPDFLink_GetURL(handle, index, std::ptr::null_mut(), 0) };
        if size <= 0 {
            return Ok(String::new());
        }

        let mut buffer: Vec<u16> = vec![0; size as usize];
        unsafe {
            FPDFLink_GetURL(handle, index, buffer.as_mut_ptr(), size);
        }

        while buffer.last() == Some(&0) {
            buffer.pop();
        }

        String::from_utf16(&buffer).map_err(|e| PdfError::InvalidData {
            reason: format!("Web link URL is not valid UTF-16: {}", e),
        })
    }

    fn close_web_links(&self, list: PdfiumLinkList) {
        unsafe {
            FPDFLink_CloseWebLinks(list.0);
        }
    }
}
