//! List the web links PDFium detects on every page of a PDF.
//!
//! Usage: cargo run --features pdfium --example list_web_links <pdf_path> [password]
//!
//! Set `RUST_LOG=debug` to trace link list load and release.

use pdfium_weblinks::Pdfium;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_path> [password]", args[0]);
        std::process::exit(1);
    }

    let pdf_path = &args[1];
    let password = args.get(2).map(|s| s.as_str());

    let pdfium = Pdfium::new()?;
    let doc = pdfium.load_pdf_from_file(pdf_path, password)?;
    println!("{}: {} pages", pdf_path, doc.page_count());

    let mut total = 0;
    for page in doc.pages() {
        let page = page?;
        let text = page.text()?;
        let mut links = text.load_web_links(&pdfium)?;

        for link in links.links(&text)? {
            total += 1;
            println!("page {} link {}: {}", page.index() + 1, link.index, link.url);
            if link.rects.is_empty() {
                println!("    (not located in page text)");
            }
            for rect in &link.rects {
                println!(
                    "    at ({:.1}, {:.1}) - ({:.1}, {:.1})",
                    rect.left, rect.bottom, rect.right, rect.top
                );
            }
        }

        links.close();
    }

    println!("{} web links", total);
    Ok(())
}
