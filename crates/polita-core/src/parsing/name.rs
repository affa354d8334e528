use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::labels::{self, NAME_RULE};
use crate::parsing::text::DocumentText;

static WINDOWED_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_RULE.pattern).expect("valid name pattern"));

/// Stricter whole-document form: two or three words instead of two to
/// four, since without a nearby label a long all-caps run is more likely
/// a heading than a person.
static FALLBACK_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-ZĂÂÎȘȚŞŢ][A-ZĂÂÎȘȚŞŢ'-]+(?: [A-ZĂÂÎȘȚŞŢ][A-ZĂÂÎȘȚŞŢ'-]+){1,2}\b")
        .expect("valid fallback name pattern")
});

/// Find the insured party's name: a run of consecutive all-uppercase
/// words near an ownership label, or the first such run in the document.
pub fn extract_name(doc: &DocumentText) -> Option<String> {
    if let Some((window, _)) = labels::label_window(doc, &NAME_RULE) {
        if let Some(m) = WINDOWED_NAME_REGEX.find(window) {
            return Some(m.as_str().to_string());
        }
    }

    FALLBACK_NAME_REGEX
        .find(&doc.flat)
        .map(|m| m.as_str().to_string())
}
