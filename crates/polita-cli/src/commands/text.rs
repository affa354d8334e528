use polita_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

pub fn run(pdf_file: PathBuf) -> Result<(), polita_core::error::PolitaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let doc = polita_core::extract_document_text(&pdf_bytes, &extractor)?;
    println!("{}", doc.reconstructed());
    Ok(())
}
