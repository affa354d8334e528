use std::fmt::Write;

use polita_core::model::PolicyFields;

/// Render fields as an aligned two-column listing, `-` for missing values.
pub fn format_fields(fields: &PolicyFields) -> String {
    let entries = fields.entries();
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (key, value) in entries {
        let shown = if value.is_empty() { "-" } else { value };
        let _ = writeln!(out, "{key:<width$}  {shown}");
    }
    out
}
