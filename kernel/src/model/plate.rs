use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Regional plate shape: three uppercase letters, a dash, three or four
/// digits (`ABC-123`, `ABC-1234`). No checksum or jurisdiction rules.
static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{3}-\d{3,4}").expect("plate pattern must compile"));

/// Outcome of scanning recognized text for a plate. `NotFound` is a valid
/// result, not an error: not every photograph contains a legible plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateResult {
    Found(String),
    NotFound,
}

/// Returns the first substring of `raw_text` that looks like a plate.
pub fn match_plate(raw_text: &str) -> PlateResult {
    match PLATE_PATTERN.find(raw_text) {
        Some(m) => PlateResult::Found(m.as_str().to_string()),
        None => PlateResult::NotFound,
    }
}

/// Append-only audit record written whenever a scan recognizes a plate.
#[derive(Debug, Clone)]
pub struct DetectedPlate {
    pub plate_number: String,
    pub timestamp: DateTime<Utc>,
}
