use polita_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), polita_core::error::PolitaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let fields = polita_core::extract_policy_fields(&pdf_bytes, &extractor);

    if fields.is_empty() {
        eprintln!(
            "warning: no policy fields recognized in {}",
            pdf_file.display()
        );
    }

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&fields)?,
        _ => output::table::format_fields(&fields),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&fields)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} field(s), written to {}",
                fields.found_count(),
                path.display()
            );
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
