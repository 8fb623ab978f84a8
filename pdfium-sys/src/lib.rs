//! FFI bindings to PDFium
//!
//! Low-level bindings to the subset of PDFium used for web link detection:
//! library initialisation, document and page loading, text pages, text search
//! and the `FPDFLink_*WebLinks` family.
//!
//! Bindings are generated by `bindgen` at build time. Point `PDFIUM_LIB_DIR` at
//! a directory holding the PDFium shared library (headers are looked up in
//! `include/` next to it, or set `PDFIUM_INCLUDE_DIR`).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

// Include generated bindings
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
