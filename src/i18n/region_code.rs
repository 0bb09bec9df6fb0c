use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::errors::ConfigError;

static REGION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("region code pattern is valid"));

/// ISO 3166-1 alpha-2 region code, always upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// Trims and upper-cases `value`, then checks it is a usable region.
    /// The unknown region `ZZ` is rejected.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let code = value.trim().to_ascii_uppercase();
        if !REGION_CODE_PATTERN.is_match(&code) || code == Self::get_unknown() {
            return Err(ConfigError::InvalidRegionCode(value.to_owned()));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;
    use crate::errors::ConfigError;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let region = RegionCode::parse(" us ").unwrap();
        assert_eq!(region.as_str(), "US");
        assert_eq!(region.to_string(), "US");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        for input in ["", "U", "USA", "1A", "U-", "zz"] {
            assert_eq!(
                RegionCode::parse(input),
                Err(ConfigError::InvalidRegionCode(input.to_owned())),
                "should reject {input:?}"
            );
        }
    }
}
