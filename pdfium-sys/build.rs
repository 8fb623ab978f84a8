use std::env;
use std::path::{Path, PathBuf};

/// Public headers the bindings are generated from.
const HEADERS: &[&str] = &["fpdfview.h", "fpdf_text.h"];

/// Conventional install prefixes probed when no override is set.
const SYSTEM_PREFIXES: &[&str] = &["/usr/local", "/usr", "/opt/pdfium"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PDFIUM_LIB_DIR");
    println!("cargo:rerun-if-env-changed=PDFIUM_INCLUDE_DIR");

    let target = env::var("TARGET").unwrap();

    // Priority 1: Manual override via PDFIUM_LIB_DIR
    let lib_dir = match env::var("PDFIUM_LIB_DIR") {
        Ok(dir) => {
            println!("cargo:warning=Using PDFIUM_LIB_DIR: {}", dir);
            PathBuf::from(dir)
        }
        // Priority 2: System install
        Err(_) => find_system_lib(&target).unwrap_or_else(|| {
            panic!(
                "PDFium library not found. Either:\n\
                 1. Set PDFIUM_LIB_DIR to a directory containing {}\n\
                 2. Install PDFium under one of: {}",
                library_file_name(&target),
                SYSTEM_PREFIXES.join(", ")
            )
        }),
    };

    setup_linking(&lib_dir, &target);

    // Priority 1: PDFIUM_INCLUDE_DIR; otherwise headers next to the library
    let include_dir = match env::var("PDFIUM_INCLUDE_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => find_headers(&lib_dir).unwrap_or_else(|| {
            panic!(
                "Cannot find PDFium headers. Expected {}/include, {}/../include \
                 or set PDFIUM_INCLUDE_DIR",
                lib_dir.display(),
                lib_dir.display()
            )
        }),
    };

    generate_bindings(&include_dir);
}

fn library_file_name(target: &str) -> &'static str {
    if target.contains("windows") {
        "pdfium.dll"
    } else if target.contains("apple") {
        "libpdfium.dylib"
    } else {
        "libpdfium.so"
    }
}

fn find_system_lib(target: &str) -> Option<PathBuf> {
    let file_name = library_file_name(target);
    SYSTEM_PREFIXES
        .iter()
        .map(|prefix| Path::new(prefix).join("lib"))
        .find(|dir| dir.join(file_name).exists())
}

fn find_headers(lib_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        Some(lib_dir.join("include")),
        lib_dir.parent().map(|p| p.join("include")),
        lib_dir.parent().map(|p| p.join("include/pdfium")),
        lib_dir.parent().map(|p| p.join("public")),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|dir| dir.join("fpdfview.h").exists())
}

fn setup_linking(lib_dir: &Path, target: &str) {
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=dylib=pdfium");

    // Add rpath for runtime library discovery (macOS/Linux)
    if target.contains("apple") || target.contains("linux") {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_dir.display());
    }
}

fn generate_bindings(headers_dir: &Path) {
    println!("cargo:rerun-if-changed={}", headers_dir.display());

    let mut builder = bindgen::Builder::default();
    for header in HEADERS {
        builder = builder.header(headers_dir.join(header).to_str().unwrap());
    }

    let bindings = builder
        .clang_arg(format!("-I{}", headers_dir.display()))
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        // Library lifetime and document/page loading
        .allowlist_function("FPDF_InitLibrary")
        .allowlist_function("FPDF_DestroyLibrary")
        .allowlist_function("FPDF_GetLastError")
        .allowlist_function("FPDF_LoadDocument")
        .allowlist_function("FPDF_LoadMemDocument")
        .allowlist_function("FPDF_CloseDocument")
        .allowlist_function("FPDF_GetPageCount")
        .allowlist_function("FPDF_LoadPage")
        .allowlist_function("FPDF_ClosePage")
        // Text pages, search and web links
        .allowlist_function("FPDFText_.*")
        .allowlist_function("FPDFLink_.*WebLinks")
        .allowlist_function("FPDFLink_GetURL")
        .allowlist_function("FPDFLink_CountRects")
        .allowlist_function("FPDFLink_GetRect")
        .allowlist_function("FPDFLink_GetTextRange")
        .allowlist_type("FPDF.*")
        .allowlist_var("FPDF_ERR_.*")
        .allowlist_var("FPDF_MATCHCASE")
        .allowlist_var("FPDF_MATCHWHOLEWORD")
        .allowlist_var("FPDF_CONSECUTIVE")
        .opaque_type("fpdf_.*")
        .generate()
        .expect("Unable to generate bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
