use serde::Serialize;
use std::fmt;

use crate::parsing::text::DocumentText;

/// Which policy field a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Vin,
    Plate,
    Validity,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Vin => write!(f, "vin"),
            Field::Plate => write!(f, "plate"),
            Field::Validity => write!(f, "validity"),
            Field::Name => write!(f, "name"),
        }
    }
}

/// A label-proximity rule: where and how a field's value is looked for.
///
/// Labels are lowercase and tried left to right; the window opens after
/// the first occurrence of the first label that is present at all, and
/// later labels are not consulted. A window can cut a value mid-token, in
/// which case the windowed search fails and the field's fallback runs.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRule {
    pub field: Field,
    /// Lowercase label synonyms, most specific first.
    pub labels: &'static [&'static str],
    /// Characters of flat text searched after the label.
    pub window: usize,
    /// Pattern matched against the (original case) window or document.
    pub pattern: &'static str,
}

pub static VIN_RULE: FieldRule = FieldRule {
    field: Field::Vin,
    labels: &[
        "vin",
        "serie șasiu",
        "serie şasiu",
        "serie sasiu",
        "serie civ",
        "serie",
    ],
    window: 120,
    pattern: r"\b[A-HJ-NPR-Z0-9]{17}\b",
};

pub static PLATE_RULE: FieldRule = FieldRule {
    field: Field::Plate,
    labels: &[
        "nr. înmatriculare",
        "nr. inmatriculare",
        "număr înmatriculare",
        "numar inmatriculare",
        "înmatriculare",
        "inmatriculare",
    ],
    window: 80,
    pattern: r"\b(?:B|[A-Z]{2})\s?\d{2,3}\s?[A-Z]{3}\b",
};

pub static VALIDITY_RULE: FieldRule = FieldRule {
    field: Field::Validity,
    labels: &[
        "valabilitate contract",
        "perioada de asigurare",
        "valabilitate",
    ],
    window: 200,
    pattern: r"\b\d{2}[./-]\d{2}[./-]\d{4}\b",
};

pub static NAME_RULE: FieldRule = FieldRule {
    field: Field::Name,
    labels: &["asigurat", "proprietar", "utilizator", "asigurat/utilizator"],
    window: 120,
    pattern: r"\b[A-ZĂÂÎȘȚŞŢ][A-ZĂÂÎȘȚŞŢ'-]+(?: [A-ZĂÂÎȘȚŞŢ][A-ZĂÂÎȘȚŞŢ'-]+){1,3}\b",
};

/// All rules in pipeline order.
pub static FIELD_RULES: &[&FieldRule] = &[&VIN_RULE, &PLATE_RULE, &VALIDITY_RULE, &NAME_RULE];

/// Find the text window after the first occurrence of the first matching
/// label. Returns the window and its lowercase twin, or None when none of
/// the rule's labels occur in the document.
pub fn label_window<'a>(doc: &'a DocumentText, rule: &FieldRule) -> Option<(&'a str, &'a str)> {
    for label in rule.labels {
        if let Some(pos) = doc.flat_lower.find(label) {
            return Some(window_after(doc, pos + label.len(), rule.window));
        }
    }
    None
}

/// Slice up to `window` characters of flat text starting at byte `start`.
fn window_after(doc: &DocumentText, start: usize, window: usize) -> (&str, &str) {
    let rest = &doc.flat[start..];
    let end = match rest.char_indices().nth(window) {
        Some((offset, _)) => start + offset,
        None => doc.flat.len(),
    };
    (&doc.flat[start..end], &doc.flat_lower[start..end])
}
