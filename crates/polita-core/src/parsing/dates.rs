use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::parsing::labels::{self, VALIDITY_RULE};
use crate::parsing::text::DocumentText;

/// Markers preceding the start and end dates inside a validity window.
const START_MARKERS: &[&str] = &["de la"];
const END_MARKERS: &[&str] = &["până la", "pana la"];

/// Accepted input forms, tried in order. Mixed separators match none of
/// them and the token is discarded.
const INPUT_FORMATS: &[&str] = &["%d.%m.%Y", "%d-%m-%Y", "%d/%m/%Y"];

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VALIDITY_RULE.pattern).expect("valid date pattern"));

/// Extract the validity period as ISO (start, end) dates.
///
/// The window near a validity label is searched first, looking for a date
/// after "de la" and one after "până la". Any side still missing falls
/// back to all parseable dates in the document: the earliest becomes the
/// start, and the latest becomes the end when at least two distinct dates
/// exist.
pub fn extract_validity(doc: &DocumentText) -> (Option<String>, Option<String>) {
    let mut start = None;
    let mut end = None;

    if let Some((window, window_lower)) = labels::label_window(doc, &VALIDITY_RULE) {
        start = date_after_marker(window, window_lower, START_MARKERS);
        end = date_after_marker(window, window_lower, END_MARKERS);
    }

    if start.is_none() || end.is_none() {
        let all = all_dates(&doc.flat);
        if start.is_none() {
            start = all.iter().next().map(format_iso);
        }
        if end.is_none() && all.len() >= 2 {
            end = all.iter().next_back().map(format_iso);
        }
    }

    (start, end)
}

/// First parseable date following the first marker present in the window.
fn date_after_marker(window: &str, window_lower: &str, markers: &[&str]) -> Option<String> {
    for marker in markers {
        if let Some(pos) = window_lower.find(marker) {
            let after = &window[pos + marker.len()..];
            return DATE_REGEX
                .find_iter(after)
                .find_map(|m| parse_date(m.as_str()))
                .map(|d| format_iso(&d));
        }
    }
    None
}

/// All distinct parseable dates in the text, in chronological order.
fn all_dates(text: &str) -> BTreeSet<NaiveDate> {
    DATE_REGEX
        .find_iter(text)
        .filter_map(|m| parse_date(m.as_str()))
        .collect()
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

fn format_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
