//! Text search options and, with the `pdfium` feature, the native search handle.

/// Search option flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfSearchOptions {
    /// Case-sensitive matching.
    pub match_case: bool,
    /// Match whole words only.
    pub match_whole_word: bool,
    /// Find consecutive matches (no gap between matches).
    pub consecutive: bool,
}

impl PdfSearchOptions {
    /// Create new search options with all flags disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable case-sensitive matching.
    pub fn case_sensitive(mut self) -> Self {
        self.match_case = true;
        self
    }

    /// Enable whole word matching.
    pub fn whole_word(mut self) -> Self {
        self.match_whole_word = true;
        self
    }

    /// Enable consecutive matching.
    pub fn consecutive(mut self) -> Self {
        self.consecutive = true;
        self
    }

    /// Convert to PDFium flags.
    pub fn to_flags(self) -> u32 {
        let mut flags = 0u32;
        if self.match_case {
            flags |= 0x0001; // FPDF_MATCHCASE
        }
        if self.match_whole_word {
            flags |= 0x0002; // FPDF_MATCHWHOLEWORD
        }
        if self.consecutive {
            flags |= 0x0004; // FPDF_CONSECUTIVE
        }
        flags
    }
}

#[cfg(feature = "pdfium")]
pub use native::PdfTextSearch;

#[cfg(feature = "pdfium")]
mod native {
    use super::PdfSearchOptions;
    use crate::engine::TextMatch;
    use crate::error::{PdfError, Result};
    use pdfium_sys::{
        FPDFText_FindClose, FPDFText_FindNext, FPDFText_FindStart, FPDFText_GetSchCount,
        FPDFText_GetSchResultIndex, FPDF_SCHHANDLE, FPDF_TEXTPAGE,
    };
    use std::marker::PhantomData;

    /// A text search context for finding text within a PDF page.
    ///
    /// The search handle is automatically closed when dropped and cannot
    /// outlive the text page it searches.
    pub struct PdfTextSearch<'a> {
        handle: FPDF_SCHHANDLE,
        _text_page: PhantomData<&'a FPDF_TEXTPAGE>,
    }

    impl<'a> PdfTextSearch<'a> {
        /// Start a search on `text_page`.
        ///
        /// The text page handle must stay valid for the lifetime of the search.
        pub(crate) fn new(
            text_page: FPDF_TEXTPAGE,
            pattern: &str,
            options: PdfSearchOptions,
        ) -> Result<Self> {
            // Convert pattern to UTF-16LE (null-terminated)
            let utf16: Vec<u16> = pattern.encode_utf16().chain(std::iter::once(0)).collect();

            let handle = unsafe {
                FPDFText_FindStart(
                    text_page,
                    utf16.as_ptr(),
                    options.to_flags() as libc::c_ulong,
                    0,
                )
            };

            if handle.is_null() {
                return Err(PdfError::SearchError(
                    "Failed to start text search".to_string(),
                ));
            }

            Ok(Self {
                handle,
                _text_page: PhantomData,
            })
        }

        /// Advance to the next occurrence and return its span.
        pub fn find_next(&mut self) -> Option<TextMatch> {
            let found = unsafe { FPDFText_FindNext(self.handle) };
            if found == 0 {
                return None;
            }
            let start = unsafe { FPDFText_GetSchResultIndex(self.handle) };
            let count = unsafe { FPDFText_GetSchCount(self.handle) };
            if start < 0 || count <= 0 {
                return None;
            }
            Some(TextMatch::new(start as usize, count as usize))
        }
    }

    impl Iterator for PdfTextSearch<'_> {
        type Item = TextMatch;

        fn next(&mut self) -> Option<Self::Item> {
            self.find_next()
        }
    }

    impl Drop for PdfTextSearch<'_> {
        fn drop(&mut self) {
            unsafe {
                FPDFText_FindClose(self.handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_default() {
        let opts = PdfSearchOptions::default();
        assert!(!opts.match_case);
        assert!(!opts.match_whole_word);
        assert!(!opts.consecutive);
        assert_eq!(opts.to_flags(), 0);
    }

    #[test]
    fn test_search_options_flags() {
        let opts = PdfSearchOptions::new().case_sensitive().whole_word();
        assert_eq!(opts.to_flags(), 0x0003);
        assert_eq!(PdfSearchOptions::new().consecutive().to_flags(), 0x0004);
    }
}
