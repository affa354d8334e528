use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::labels::{self, PLATE_RULE};
use crate::parsing::text::DocumentText;

static PLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLATE_RULE.pattern).expect("valid plate pattern"));

/// Canonical group split of a stripped, uppercased plate: the one-letter
/// Bucharest code or a two-letter county code, two or three digits, and
/// three letters.
static PLATE_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(B|[A-Z]{2})(\d{2,3})([A-Z]{3})$").expect("valid group pattern")
});

/// Find the registration plate and normalize its spacing.
pub fn extract_plate(doc: &DocumentText) -> Option<String> {
    if let Some(m) = PLATE_REGEX.find(&doc.flat) {
        return Some(normalize(m.as_str()));
    }

    // A window slice starts at a fresh word boundary, so a value glued to
    // its label still matches here.
    let (window, _) = labels::label_window(doc, &PLATE_RULE)?;
    PLATE_REGEX.find(window).map(|m| normalize(m.as_str()))
}

/// Rewrite a matched plate as "COUNTY DIGITS LETTERS". A value that does
/// not reduce to either format rule is returned stripped and uppercased.
fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();
    match PLATE_GROUPS.captures(&stripped) {
        Some(groups) => format!("{} {} {}", &groups[1], &groups[2], &groups[3]),
        None => stripped,
    }
}
