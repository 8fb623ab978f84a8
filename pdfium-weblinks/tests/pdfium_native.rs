//! Tests against the real PDFium library.
//!
//! Run with `cargo test --features pdfium` and `PDFIUM_LIB_DIR` set.

#![cfg(feature = "pdfium")]

use pdfium_weblinks::{PdfError, PdfSearchOptions, Pdfium, TextPageSearch};
use serial_test::serial;
use std::io::Write;

const URL: &str = "https://example.com";

/// Build a one-page PDF showing `line` in Helvetica at (72, 700).
fn single_page_pdf(line: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 700 Td ({}) Tj ET", line);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        write!(pdf, "{} 0 obj\n{}\nendobj\n", i + 1, body).unwrap();
    }

    let xref_offset = pdf.len();
    write!(pdf, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).unwrap();
    for offset in offsets {
        write!(pdf, "{:010} 00000 n \n", offset).unwrap();
    }
    write!(
        pdf,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    )
    .unwrap();
    pdf
}

fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
#[serial]
fn test_detects_url_and_locates_it() {
    let pdfium = Pdfium::new().unwrap();
    let file = write_temp_pdf(&single_page_pdf(&format!("Visit {} for details", URL)));
    let doc = pdfium.load_pdf_from_file(file.path(), None).unwrap();
    assert_eq!(doc.page_count(), 1);

    let page = doc.page(0).unwrap();
    let text = page.text().unwrap();
    let mut links = text.load_web_links(&pdfium).unwrap();

    assert_eq!(links.count().unwrap(), 1);
    assert_eq!(links.url(0).unwrap(), URL);

    let rects = links.rects(0, &text).unwrap();
    assert!(!rects.is_empty());
    for rect in &rects {
        assert!(rect.width() > 0.0);
        assert!(rect.height() > 0.0);
        assert!(rect.left >= 72.0);
    }

    links.close();
    links.close();
    assert!(links.count().unwrap_err().is_already_closed());
}

#[test]
#[serial]
fn test_search_is_case_insensitive_by_default() {
    let pdfium = Pdfium::new().unwrap();
    let doc = pdfium
        .load_pdf_from_bytes(single_page_pdf("See HTTPS://EXAMPLE.COM now"), None)
        .unwrap();
    let text = doc.page(0).unwrap().text().unwrap();

    let matches = text.search(URL, PdfSearchOptions::new()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(text.range(matches[0].start_index, matches[0].count), "HTTPS://EXAMPLE.COM");

    let strict = text
        .search(URL, PdfSearchOptions::new().case_sensitive())
        .unwrap();
    assert!(strict.is_empty());
}

#[test]
#[serial]
fn test_oversized_spans_are_clamped_or_rejected() {
    let pdfium = Pdfium::new().unwrap();
    let doc = pdfium
        .load_pdf_from_bytes(single_page_pdf("Short line"), None)
        .unwrap();
    let text = doc.page(0).unwrap().text().unwrap();

    assert_eq!(text.range(0, usize::MAX), text.all());
    assert_eq!(text.range(2, usize::MAX), text.all()[2..]);
    assert!(text.range(usize::MAX, 1).is_empty());
    assert!(text.range(text.char_count(), 1).is_empty());

    assert!(matches!(
        text.text_rects(usize::MAX, 1),
        Err(PdfError::TextExtractionFailed { .. })
    ));
    assert!(matches!(
        text.text_rects(0, usize::MAX),
        Err(PdfError::TextExtractionFailed { .. })
    ));
}

#[test]
#[serial]
fn test_page_without_links() {
    let pdfium = Pdfium::new().unwrap();
    let doc = pdfium
        .load_pdf_from_bytes(single_page_pdf("No links on this page"), None)
        .unwrap();
    let text = doc.page(0).unwrap().text().unwrap();
    let links = text.load_web_links(&pdfium).unwrap();

    assert_eq!(links.count().unwrap(), 0);
    assert!(matches!(
        links.url(0),
        Err(PdfError::LinkIndexOutOfBounds { index: 0, count: 0 })
    ));
}

#[test]
#[serial]
fn test_page_index_out_of_bounds() {
    let pdfium = Pdfium::new().unwrap();
    let doc = pdfium
        .load_pdf_from_bytes(single_page_pdf("Hello"), None)
        .unwrap();

    assert!(matches!(
        doc.page(3),
        Err(PdfError::PageIndexOutOfBounds { index: 3, count: 1 })
    ));
}

#[test]
#[serial]
fn test_missing_file() {
    let pdfium = Pdfium::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let result = pdfium.load_pdf_from_file(dir.path().join("missing.pdf"), None);

    assert!(matches!(result, Err(PdfError::FileNotFound(_))));
}
