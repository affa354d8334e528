pub mod dates;
pub mod labels;
pub mod name;
pub mod plate;
pub mod text;
pub mod vin;

use crate::model::PolicyFields;
use text::DocumentText;

/// Run all field extractors over the reconstructed text.
///
/// Fields that cannot be located stay empty; a sparse result is a normal
/// outcome, not an error.
pub fn extract_fields(doc: &DocumentText) -> PolicyFields {
    let (start, end) = dates::extract_validity(doc);
    let fields = PolicyFields {
        name: trimmed(name::extract_name(doc)),
        vin_number: trimmed(vin::extract_vin(doc)),
        plate_number: trimmed(plate::extract_plate(doc)),
        insurance_start: trimmed(start),
        insurance_end: trimmed(end),
    };
    tracing::debug!(found = fields.found_count(), "field extraction finished");
    fields
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
