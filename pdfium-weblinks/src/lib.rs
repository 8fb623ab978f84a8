//! # pdfium-weblinks
//!
//! Scoped access to the web links PDFium detects in page text.
//!
//! - **Single release**: a link list is freed exactly once, by
//!   [`PdfWebLinks::close`] or on drop, whichever comes first
//! - **Use-after-close guard**: reads on a released list return
//!   [`PdfError::AlreadyClosed`] instead of touching freed native memory
//! - **Link geometry**: [`PdfWebLinks::rects`] locates a link's URL in the
//!   page text and returns the rectangles of every occurrence
//!
//! The core is engine-agnostic: [`WebLinkEngine`] and [`TextPageSearch`] are
//! the native boundaries. Enable the `pdfium` feature for the PDFium backend.
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "pdfium")]
//! # fn main() -> Result<(), pdfium_weblinks::PdfError> {
//! use pdfium_weblinks::Pdfium;
//!
//! let pdfium = Pdfium::new()?;
//! let doc = pdfium.load_pdf_from_file("document.pdf", None)?;
//!
//! for page in doc.pages() {
//!     let text = page?.text()?;
//!     let mut links = text.load_web_links(&pdfium)?;
//!     for index in 0..links.count()? {
//!         println!("{} at {:?}", links.url(index)?, links.rects(index, &text)?);
//!     }
//!     links.close();
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pdfium"))]
//! # fn main() {}
//! ```

mod engine;
mod error;
mod link;
mod search;

#[cfg(feature = "pdfium")]
mod document;
#[cfg(feature = "pdfium")]
mod pdfium;
#[cfg(feature = "pdfium")]
mod text;

pub use engine::{PdfRect, TextMatch, TextPageSearch, WebLinkEngine};
pub use error::{PdfError, Result};
pub use link::{PdfWebLink, PdfWebLinks};
pub use search::PdfSearchOptions;

#[cfg(feature = "pdfium")]
pub use document::{PdfDocument, PdfPage};
#[cfg(feature = "pdfium")]
pub use pdfium::{Pdfium, PdfiumLinkList};
#[cfg(feature = "pdfium")]
pub use search::PdfTextSearch;
#[cfg(feature = "pdfium")]
pub use text::PdfPageText;
