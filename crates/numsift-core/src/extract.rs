//! Candidate extraction: finds substrings of free text shaped like phone
//! numbers, before any validation happens.

use crate::domain::phone::is_zero_width;
use once_cell::sync::Lazy;
use regex::Regex;

// A leading digit plus at least 6 more separator-or-digit characters, ending
// in a digit. Only horizontal whitespace is a separator so lines never merge.
static SEPARATED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?[0-9][0-9 \t\-()]{5,}[0-9]").expect("valid candidate pattern")
});

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{6,15}").expect("valid digit run pattern"));

/// Longest run, excluding a leading `+`, that is treated as one number.
pub const MAX_CANDIDATE_LEN: usize = 20;
/// Minimum digits for each piece when an overlong run is split on spaces.
const MIN_PIECE_DIGITS: usize = 9;

/// Returns the phone-number-shaped substrings of `text`, left to right.
///
/// Runs touching a letter or underscore are skipped. A run longer than
/// [`MAX_CANDIDATE_LEN`] is split on whitespace when every piece carries a
/// full number's worth of digits, and otherwise kept whole so it surfaces as
/// a rejected token. When no separated run survives, bare digit runs of
/// 6-15 characters are tried instead. Duplicates are kept.
pub fn extract_candidates(text: &str) -> Vec<String> {
    let text: String = text.chars().filter(|ch| !is_zero_width(*ch)).collect();

    let candidates: Vec<String> = bounded_matches(&SEPARATED_RUN, &text, is_letter_char)
        .into_iter()
        .flat_map(split_overlong)
        .collect();
    if !candidates.is_empty() {
        return candidates;
    }
    bounded_matches(&DIGIT_RUN, &text, is_word_char)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn bounded_matches<'t>(
    pattern: &Regex,
    text: &'t str,
    breaks_boundary: fn(char) -> bool,
) -> Vec<&'t str> {
    pattern
        .find_iter(text)
        .filter(|found| {
            let before = text[..found.start()].chars().next_back();
            let after = text[found.end()..].chars().next();
            !before.is_some_and(breaks_boundary) && !after.is_some_and(breaks_boundary)
        })
        .map(|found| found.as_str().trim())
        .collect()
}

fn split_overlong(run: &str) -> Vec<String> {
    if run.trim_start_matches('+').chars().count() <= MAX_CANDIDATE_LEN {
        return vec![run.to_string()];
    }

    let pieces: Vec<&str> = run.split([' ', '\t']).filter(|piece| !piece.is_empty()).collect();
    let splittable = pieces.len() > 1
        && pieces.iter().all(|piece| {
            piece.chars().filter(|ch| ch.is_ascii_digit()).count() >= MIN_PIECE_DIGITS
        });
    if splittable {
        pieces.into_iter().map(str::to_string).collect()
    } else {
        vec![run.to_string()]
    }
}

fn is_letter_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
