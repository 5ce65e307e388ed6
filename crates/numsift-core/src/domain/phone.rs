use serde::{Deserialize, Serialize};
use std::fmt;

const ZERO_WIDTH: [char; 5] = ['\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}', '\u{feff}'];

/// A validated phone number in E.164 form, e.g. `+27793612279`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    pub(crate) fn from_e164(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn is_zero_width(ch: char) -> bool {
    ZERO_WIDTH.contains(&ch)
}

/// Trims surrounding whitespace and drops zero-width characters anywhere in
/// the value.
pub fn strip_invisible(value: &str) -> String {
    let cleaned: String = value.chars().filter(|ch| !is_zero_width(*ch)).collect();
    cleaned.trim().to_string()
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
