#[derive(Debug, thiserror::Error)]
pub enum PolitaError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: usize, limit: usize },

    #[error("invalid Romanian phone number format (+40xxxxxxxxx)")]
    InvalidPhone,

    #[error("invalid Romanian plate number format (e.g. IS 12 ABC)")]
    InvalidPlate,

    #[error("invalid VIN number (must be 17 characters, no I/O/Q)")]
    InvalidVin,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
