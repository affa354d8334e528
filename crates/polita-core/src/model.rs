use serde::{Deserialize, Serialize};

/// The five extraction targets of a Romanian vehicle insurance policy.
///
/// Every key is always present: a field the extractor could not locate is
/// an empty string, never a missing entry. Dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFields {
    pub name: String,
    pub vin_number: String,
    pub plate_number: String,
    pub insurance_start: String,
    pub insurance_end: String,
}

impl PolicyFields {
    /// True when no field was located.
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_empty())
    }

    /// Number of fields that were located.
    pub fn found_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }

    /// Key/value view in output order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("vin_number", &self.vin_number),
            ("plate_number", &self.plate_number),
            ("insurance_start", &self.insurance_start),
            ("insurance_end", &self.insurance_end),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_empty() {
        let fields = PolicyFields::default();
        assert!(fields.is_empty());
        assert_eq!(fields.found_count(), 0);
    }

    #[test]
    fn serializes_with_all_five_keys() {
        let json = serde_json::to_value(PolicyFields::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in [
            "name",
            "vin_number",
            "plate_number",
            "insurance_start",
            "insurance_end",
        ] {
            assert_eq!(obj[key], "");
        }
    }

    #[test]
    fn found_count_ignores_empty_fields() {
        let fields = PolicyFields {
            plate_number: "B 99 ABC".to_string(),
            insurance_start: "2024-03-01".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.found_count(), 2);
        assert!(!fields.is_empty());
    }
}
