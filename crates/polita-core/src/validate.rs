//! Format validation for user-supplied policy data.
//!
//! These checks gate data coming from forms or API payloads, not from the
//! PDF extractor. Extraction output is normalized before it gets here, so
//! a value that fails validation was entered by hand.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PolitaError;

static PHONE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+40\d{9}$").expect("valid phone regex"));

static PLATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}\s?\d{2,3}\s?[A-Z]{3}$").expect("valid plate regex"));

static VIN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("valid vin regex"));

/// Checks a Romanian mobile number in international form: `+40` followed by
/// exactly nine digits.
pub fn validate_phone(phone: &str) -> Result<(), PolitaError> {
    if PHONE_FORMAT.is_match(phone) {
        Ok(())
    } else {
        Err(PolitaError::InvalidPhone)
    }
}

/// Checks a Romanian plate number, spaced or compact: one or two county
/// letters, two or three digits, three letters.
pub fn validate_plate(plate: &str) -> Result<(), PolitaError> {
    if PLATE_FORMAT.is_match(plate) {
        Ok(())
    } else {
        Err(PolitaError::InvalidPlate)
    }
}

/// Checks a VIN: exactly 17 characters, uppercase alphanumeric with the
/// ISO 3779 exclusions (no I, O or Q).
pub fn validate_vin(vin: &str) -> Result<(), PolitaError> {
    if VIN_FORMAT.is_match(vin) {
        Ok(())
    } else {
        Err(PolitaError::InvalidVin)
    }
}
