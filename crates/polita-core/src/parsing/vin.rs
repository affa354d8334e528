use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::labels::{self, VIN_RULE};
use crate::parsing::text::DocumentText;

static VIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VIN_RULE.pattern).expect("valid VIN pattern"));

/// Find the 17-character vehicle identification number.
///
/// The VIN alphabet (A-Z and 0-9 without I, O, Q) is distinctive enough
/// to scan the whole document first; the label window is only searched
/// when that finds nothing.
pub fn extract_vin(doc: &DocumentText) -> Option<String> {
    if let Some(m) = VIN_REGEX.find(&doc.flat) {
        return Some(m.as_str().to_string());
    }

    // A window slice starts at a fresh word boundary, so a value glued to
    // its label still matches here.
    let (window, _) = labels::label_window(doc, &VIN_RULE)?;
    VIN_REGEX.find(window).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::text::doc_from;

    #[test]
    fn vin_found_anywhere_in_document() {
        let doc = doc_from("Vehicul Dacia Logan, șasiu UU1LSRDE5PJ123456, an 2019");
        assert_eq!(extract_vin(&doc).as_deref(), Some("UU1LSRDE5PJ123456"));
    }

    #[test]
    fn vin_with_forbidden_letters_is_rejected() {
        let doc = doc_from("Serie șasiu: ABCDEFGHIJ1234567");
        assert_eq!(extract_vin(&doc), None);
    }

    #[test]
    fn eighteen_character_token_is_not_a_vin() {
        let doc = doc_from("Cod intern WVWZZZ1JZXW0000012 al dosarului");
        assert_eq!(extract_vin(&doc), None);
    }

    #[test]
    fn lowercase_token_is_not_a_vin() {
        let doc = doc_from("serie wvwzzz1jzxw000001");
        assert_eq!(extract_vin(&doc), None);
    }

    #[test]
    fn vin_glued_to_label_found_via_window() {
        // No word boundary before the token in the whole document, but the
        // window after "serie șasiu" starts right at it.
        let doc = doc_from("Serie șasiuWVWZZZ1JZXW000001 rest");
        assert_eq!(extract_vin(&doc).as_deref(), Some("WVWZZZ1JZXW000001"));
    }

    #[test]
    fn vin_broken_by_spaces_is_not_detected() {
        let doc = doc_from("Serie șasiu: WVWZZZ1JZ XW000001");
        assert_eq!(extract_vin(&doc), None);
    }
}
