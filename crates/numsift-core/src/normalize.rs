use crate::domain::phone::digits_only;
use crate::domain::{strip_invisible, NormalizedNumber, RegionCode};
use crate::error::CoreError;
use crate::extract::extract_candidates;
use phonenumber::{Mode, PhoneNumber};
use std::collections::HashSet;

/// Minimum digit count before a token is retried as a national number.
pub const NATIONAL_RETRY_MIN_DIGITS: usize = 9;
pub const NATIONAL_TRUNK_PREFIX: char = '0';

/// Result of running a single candidate through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    Accepted(NormalizedNumber),
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub accepted: Vec<NormalizedNumber>,
    pub rejected: Vec<String>,
    /// Non-empty candidates examined.
    pub examined: usize,
    pub duplicates: usize,
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    default_region: Option<RegionCode>,
    national_prefix_fallback: bool,
}

impl Normalizer {
    pub fn new(default_region: Option<RegionCode>) -> Self {
        Self {
            default_region,
            national_prefix_fallback: true,
        }
    }

    /// Toggles the retry that strips formatting and reparses `0`-prefixed
    /// digit strings as national numbers of the default region.
    pub fn with_national_prefix_fallback(mut self, enabled: bool) -> Self {
        self.national_prefix_fallback = enabled;
        self
    }

    pub fn default_region(&self) -> Option<&RegionCode> {
        self.default_region.as_ref()
    }

    /// Normalizes every candidate in order. Only a missing default region
    /// fails the call; malformed tokens end up in `rejected`.
    pub fn normalize<I, S>(&self, candidates: I) -> Result<Normalized, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = candidates
            .into_iter()
            .map(|candidate| strip_invisible(candidate.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();

        if self.default_region.is_none() && tokens.iter().any(|token| !token.starts_with('+')) {
            return Err(CoreError::MissingRegion);
        }

        let mut seen = HashSet::new();
        let mut out = Normalized::default();
        for token in tokens {
            out.examined += 1;
            match self.classify_stripped(token) {
                TokenOutcome::Accepted(number) => {
                    if seen.insert(number.clone()) {
                        out.accepted.push(number);
                    } else {
                        out.duplicates += 1;
                    }
                }
                TokenOutcome::Rejected(token) => out.rejected.push(token),
            }
        }
        Ok(out)
    }

    /// Classifies one token in isolation. Returns `None` when nothing is
    /// left after stripping whitespace and zero-width characters.
    pub fn classify(&self, candidate: &str) -> Option<TokenOutcome> {
        let token = strip_invisible(candidate);
        if token.is_empty() {
            return None;
        }
        Some(self.classify_stripped(token))
    }

    fn classify_stripped(&self, token: String) -> TokenOutcome {
        let region = if token.starts_with('+') {
            None
        } else {
            self.default_region.as_ref()
        };

        if let Some(number) = parse_valid(&token, region) {
            return TokenOutcome::Accepted(number);
        }
        if let Some(number) = self.national_retry(&token) {
            return TokenOutcome::Accepted(number);
        }
        TokenOutcome::Rejected(token)
    }

    // Heuristic: a formatted token with a trunk prefix is often a national
    // number the parser choked on. Only the default region is assumed, so
    // numbers from other regions may still be misread.
    fn national_retry(&self, token: &str) -> Option<NormalizedNumber> {
        if !self.national_prefix_fallback {
            return None;
        }
        let region = self.default_region.as_ref()?;
        let digits = digits_only(token);
        if digits.len() < NATIONAL_RETRY_MIN_DIGITS || !digits.starts_with(NATIONAL_TRUNK_PREFIX) {
            return None;
        }
        parse_valid(&digits, Some(region))
    }
}

fn parse_valid(token: &str, region: Option<&RegionCode>) -> Option<NormalizedNumber> {
    let parsed: PhoneNumber = phonenumber::parse(region.map(RegionCode::id), token).ok()?;
    if !phonenumber::is_valid(&parsed) {
        return None;
    }
    let e164 = parsed.format().mode(Mode::E164).to_string();
    Some(NormalizedNumber::from_e164(e164))
}

/// Normalizes candidates with the national-prefix retry enabled.
pub fn normalize<I, S>(
    candidates: I,
    default_region: Option<&RegionCode>,
) -> Result<Normalized, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::new(default_region.cloned()).normalize(candidates)
}

/// Extracts candidates from free text and normalizes them.
pub fn clean_text(
    text: &str,
    default_region: Option<&RegionCode>,
) -> Result<Normalized, CoreError> {
    normalize(extract_candidates(text), default_region)
}
