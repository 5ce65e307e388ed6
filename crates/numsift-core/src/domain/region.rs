use crate::error::CoreError;
use phonenumber::country;
use std::fmt;
use std::str::FromStr;

/// Two-letter region used to interpret numbers written without a country
/// calling code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCode {
    code: String,
    id: country::Id,
}

impl RegionCode {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidRegion(raw.to_string()));
        }

        let code = trimmed.to_ascii_uppercase();
        let id = code
            .parse::<country::Id>()
            .map_err(|_| CoreError::InvalidRegion(raw.to_string()))?;
        Ok(Self { code, id })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub(crate) fn id(&self) -> country::Id {
        self.id
    }
}

impl FromStr for RegionCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;
    use crate::error::CoreError;

    #[test]
    fn region_code_uppercases() {
        let region = RegionCode::new(" za ").unwrap();
        assert_eq!(region.as_str(), "ZA");
    }

    #[test]
    fn region_code_parses_from_str() {
        let region: RegionCode = "GB".parse().unwrap();
        assert_eq!(region.to_string(), "GB");
    }

    #[test]
    fn region_code_rejects_bad_shapes() {
        for raw in ["", "Z", "ZAF", "Z1", "+2"] {
            assert_eq!(
                RegionCode::new(raw),
                Err(CoreError::InvalidRegion(raw.to_string()))
            );
        }
    }

    #[test]
    fn region_code_rejects_unknown_region() {
        assert!(RegionCode::new("QQ").is_err());
    }
}
