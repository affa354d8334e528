pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod validate;

use error::PolitaError;
use extraction::{PdfExtractor, MAX_PAGES, MAX_PDF_BYTES};
use model::PolicyFields;
use parsing::text::DocumentText;

/// Main API entry point: extract policy fields from a PDF document.
///
/// Extraction is best-effort. Fields that cannot be located stay empty,
/// and any failure along the way (unreadable bytes, missing pdftotext,
/// oversized input) yields an all-empty result instead of an error.
pub fn extract_policy_fields(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> PolicyFields {
    match try_extract_policy_fields(pdf_bytes, extractor) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!(error = %e, "extraction failed, returning empty fields");
            PolicyFields::default()
        }
    }
}

/// Fallible variant of [`extract_policy_fields`] for callers that need to
/// distinguish a broken document from a policy with no recognizable fields.
pub fn try_extract_policy_fields(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<PolicyFields, PolitaError> {
    let doc = extract_document_text(pdf_bytes, extractor)?;
    Ok(parsing::extract_fields(&doc))
}

/// Extract and reconstruct the document text without running the field
/// extractors. Useful for inspecting what the parser actually sees.
pub fn extract_document_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<DocumentText, PolitaError> {
    if pdf_bytes.len() > MAX_PDF_BYTES {
        return Err(PolitaError::DocumentTooLarge {
            size: pdf_bytes.len(),
            limit: MAX_PDF_BYTES,
        });
    }

    let mut pages = extractor.extract_pages(pdf_bytes)?;
    pages.truncate(MAX_PAGES);
    tracing::debug!(
        pages = pages.len(),
        backend = extractor.backend_name(),
        "extracted pdf text"
    );

    Ok(DocumentText::from_pages(&pages))
}
