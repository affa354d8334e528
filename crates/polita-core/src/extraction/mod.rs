pub mod pdftotext;

use crate::error::PolitaError;

/// Largest byte buffer accepted as a PDF document.
pub const MAX_PDF_BYTES: usize = 32 * 1024 * 1024;

/// Pages beyond this are not extracted. Policies run one to four pages.
pub const MAX_PAGES: usize = 16;

#[derive(Debug, Clone)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// A positioned run of text, roughly one visual line.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub text: String,
    pub bbox: BBox,
}

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub blocks: Vec<TextBlock>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract positioned text from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PolitaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
