//! Identifier extraction for schema field names.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

// ASCII word characters only (`\w` without Unicode classes).
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9A-Za-z_]+").expect("static regex"));

/// First run of ASCII word characters in `raw`, e.g. `"* nodeNetwork"` → `"nodeNetwork"`.
///
/// Schema editors decorate keys with markers and padding; what survives here
/// is what goes into the json tag and (capitalized) the field name.
pub fn sanitize(raw: &str) -> Result<&str> {
    WORD_RUN
        .find(raw)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::IllegalFieldName(raw.to_string()))
}

/// Uppercase the first character, leave the rest alone.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
