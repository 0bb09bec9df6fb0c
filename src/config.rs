// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::debug;

use crate::{engine::NumberingEngine, errors::ConfigError, i18n::RegionCode};

/// Variable holding the region used for input without a `+` prefix.
pub const DEFAULT_REGION_ENV: &str = "PHONEXTRACT_DEFAULT_REGION";

/// Value of [`DEFAULT_REGION_ENV`] when the binary was built, if any.
const BUILD_DEFAULT_REGION: Option<&str> = option_env!("PHONEXTRACT_DEFAULT_REGION");

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub default_region: Option<RegionCode>,
}

impl Config {
    /// Reads the configuration from the environment, falling back to the
    /// value captured at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), BUILD_DEFAULT_REGION)
    }

    /// Builds the configuration from `lookup`. A blank value counts as unset.
    pub fn from_lookup<F>(lookup: F, build_default: Option<&str>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(DEFAULT_REGION_ENV)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                build_default
                    .filter(|value| !value.trim().is_empty())
                    .map(str::to_owned)
            });

        let default_region = raw.as_deref().map(str::parse::<RegionCode>).transpose()?;
        debug!("Default region: {:?}", default_region);
        Ok(Self { default_region })
    }

    /// Checks that the configured region is one the engine can parse with.
    pub fn validate<E: NumberingEngine>(self, engine: &E) -> Result<Self, ConfigError> {
        if let Some(region) = &self.default_region {
            if !engine.supports_region(region) {
                return Err(ConfigError::UnsupportedRegion(region.to_string()));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_REGION_ENV};
    use crate::{engine::PhoneNumberEngine, errors::ConfigError, tests::fake_engine::FakeEngine};

    fn env(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, DEFAULT_REGION_ENV);
            value.map(str::to_owned)
        }
    }

    #[test]
    fn test_unset_means_no_default_region() {
        assert_eq!(Config::from_lookup(env(None), None).unwrap(), Config::default());
        assert_eq!(Config::from_lookup(env(Some("  ")), None).unwrap(), Config::default());
    }

    #[test]
    fn test_runtime_value_wins_over_build_value() {
        let config = Config::from_lookup(env(Some("in")), Some("US")).unwrap();
        assert_eq!(config.default_region.unwrap().as_str(), "IN");

        let config = Config::from_lookup(env(None), Some("US")).unwrap();
        assert_eq!(config.default_region.unwrap().as_str(), "US");
    }

    #[test]
    fn test_invalid_region_is_rejected() {
        assert_eq!(
            Config::from_lookup(env(Some("USA")), None),
            Err(ConfigError::InvalidRegionCode("USA".to_owned()))
        );
        assert_eq!(
            Config::from_lookup(env(None), Some("zz")),
            Err(ConfigError::InvalidRegionCode("zz".to_owned()))
        );
    }

    #[test]
    fn test_validate_against_engine() {
        let config = Config::from_lookup(env(Some("XX")), None).unwrap();
        assert_eq!(
            config.validate(&FakeEngine::default()),
            Err(ConfigError::UnsupportedRegion("XX".to_owned()))
        );

        let config = Config::from_lookup(env(Some("de")), None).unwrap();
        assert!(config.validate(&PhoneNumberEngine::new()).is_ok());
    }
}
