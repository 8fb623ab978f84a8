//! Error types for pdfium-weblinks

use thiserror::Error;

/// Result type for pdfium-weblinks operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Error types for PDF operations
#[derive(Error, Debug)]
pub enum PdfError {
    /// A native resource was used after it had been released
    #[error("{resource} has been closed")]
    AlreadyClosed { resource: &'static str },

    /// Web link index out of bounds
    #[error("Web link index {index} out of bounds (page has {count} links)")]
    LinkIndexOutOfBounds { index: usize, count: usize },

    /// Failed to initialize PDFium library
    #[error("Failed to initialize PDFium library")]
    InitializationFailed,

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Failed to open PDF document
    #[error("Failed to open PDF document: {reason}")]
    OpenFailed { reason: String },

    /// Invalid password for encrypted PDF
    #[error("Invalid password for encrypted PDF")]
    InvalidPassword,

    /// Page index out of bounds
    #[error("Page index {index} out of bounds (document has {count} pages)")]
    PageIndexOutOfBounds { index: usize, count: usize },

    /// Failed to load page
    #[error("Failed to load page {index}")]
    PageLoadFailed { index: usize },

    /// Failed to extract text
    #[error("Failed to extract text: {reason}")]
    TextExtractionFailed { reason: String },

    /// Failed to extract links
    #[error("Failed to extract links: {reason}")]
    LinkExtractionFailed { reason: String },

    /// Invalid data (e.g., malformed UTF-16)
    #[error("Invalid data: {reason}")]
    InvalidData { reason: String },

    /// Search operation failed
    #[error("Search error: {0}")]
    SearchError(String),
}

impl PdfError {
    /// Whether this error reports use of a released handle.
    pub fn is_already_closed(&self) -> bool {
        matches!(self, PdfError::AlreadyClosed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_closed_message() {
        let err = PdfError::AlreadyClosed {
            resource: "WebLinks",
        };
        assert_eq!(err.to_string(), "WebLinks has been closed");
        assert!(err.is_already_closed());
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = PdfError::LinkIndexOutOfBounds { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "Web link index 3 out of bounds (page has 2 links)"
        );
        assert!(!err.is_already_closed());
    }
}
