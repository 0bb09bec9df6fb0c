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

use std::{panic, sync::LazyLock};

use log::{debug, trace, warn};
use phonenumber::{country, metadata::DATABASE, Mode, PhoneNumber};

use super::{
    offline_data::{CARRIER_EN, COUNTRY_NAMES_EN, GEOCODING_EN, TIMEZONES, TIMEZONES_BY_REGION},
    prefix_map::PrefixMap,
    FormatStyle, LineType, NumberingEngine,
};
use crate::{
    errors::EngineError,
    i18n::{self, RegionCode},
    regexp_cache::RegexCache,
};

/// Country calling codes where mobile number ranges are tied to a
/// geographic area, so mobile numbers can be geocoded below country level.
const GEO_MOBILE_COUNTRIES: &[u16] = &[52, 54, 55, 62, 84, 86];

const TIME_ZONE_SEPARATOR: char = '&';

static NATIONAL_PATTERNS: LazyLock<RegexCache> = LazyLock::new(RegexCache::new);

/// Line type and region of a number, read from the metadata of every
/// region sharing its calling code.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Classification {
    line_type: LineType,
    region: Option<String>,
}

/// [`NumberingEngine`] backed by the `phonenumber` crate for parsing,
/// validation, formatting and numbering-plan metadata, and by the offline
/// tables compiled from `resources/` for geocoding, carriers and time zones.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberEngine {
    geocoding: PrefixMap,
    carriers: PrefixMap,
    time_zones: PrefixMap,
    region_time_zones: PrefixMap,
    country_names: PrefixMap,
}

impl PhoneNumberEngine {
    pub const fn new() -> Self {
        Self {
            geocoding: PrefixMap::new(GEOCODING_EN),
            carriers: PrefixMap::new(CARRIER_EN),
            time_zones: PrefixMap::new(TIMEZONES),
            region_time_zones: PrefixMap::new(TIMEZONES_BY_REGION),
            country_names: PrefixMap::new(COUNTRY_NAMES_EN),
        }
    }

    fn country_id(region: &RegionCode) -> Option<country::Id> {
        region.as_str().parse::<country::Id>().ok()
    }

    fn full_match(pattern: &str, national: &str) -> bool {
        match NATIONAL_PATTERNS.full_match(pattern, national) {
            Ok(matched) => matched,
            Err(err) => {
                warn!("Skipping metadata pattern {}: {}", pattern, err);
                false
            }
        }
    }

    /// Matches the national significant number, leading zeros included,
    /// against each region's descriptors in libphonenumber's precedence:
    /// special-rate and service types first, then fixed line and mobile.
    ///
    /// The region is the first one whose patterns give a known type. A
    /// calling code used by a single region yields that region either way.
    fn classify(&self, number: &PhoneNumber) -> Classification {
        let national = self.national_significant_number(number);
        let regions = DATABASE.by_code(&self.country_code(number)).unwrap_or_default();

        for metadata in &regions {
            let descriptors = metadata.descriptors();
            if !Self::full_match(descriptors.general().national_number().as_str(), &national) {
                continue;
            }

            let matches = |pattern: Option<&str>| pattern.is_some_and(|p| Self::full_match(p, &national));
            let special = [
                (LineType::PremiumRate, descriptors.premium_rate()),
                (LineType::TollFree, descriptors.toll_free()),
                (LineType::SharedCost, descriptors.shared_cost()),
                (LineType::VoIP, descriptors.voip()),
                (LineType::PersonalNumber, descriptors.personal_number()),
                (LineType::Pager, descriptors.pager()),
                (LineType::Uan, descriptors.uan()),
                (LineType::VoiceMail, descriptors.voicemail()),
            ]
            .map(|(line_type, descriptor)| (line_type, descriptor.map(|d| d.national_number().as_str())));
            let fixed_line = descriptors.fixed_line().map(|d| d.national_number().as_str());
            let mobile = descriptors.mobile().map(|d| d.national_number().as_str());

            let line_type = match special.into_iter().find(|&(_, pattern)| matches(pattern)) {
                Some((line_type, _)) => line_type,
                None => match (matches(fixed_line), matches(mobile)) {
                    (true, true) => LineType::FixedLineOrMobile,
                    (true, false) => LineType::FixedLine,
                    (false, true) => LineType::Mobile,
                    (false, false) => continue,
                },
            };

            trace!("{} matched {} metadata as {}", national, metadata.id(), line_type);
            return Classification {
                line_type,
                region: Self::geographic_region(metadata.id()),
            };
        }

        let region = match regions.as_slice() {
            [only] => Self::geographic_region(only.id()),
            _ => None,
        };
        Classification {
            line_type: LineType::Unknown,
            region,
        }
    }

    /// Metadata ids are region codes, except `001` for non-geographic
    /// calling codes.
    fn geographic_region(id: &str) -> Option<String> {
        RegionCode::parse(id).ok().map(|region| region.to_string())
    }

    fn is_geographical(line_type: LineType, country_code: u16) -> bool {
        line_type.is_fixed_line_like()
            || (line_type == LineType::Mobile && GEO_MOBILE_COUNTRIES.contains(&country_code))
    }

    /// `country code + national significant number`, the key format of
    /// every prefix table.
    fn prefix_key(&self, number: &PhoneNumber) -> String {
        let mut buffer = itoa::Buffer::new();
        let mut key = buffer.format(self.country_code(number)).to_owned();
        key.push_str(&self.national_significant_number(number));
        key
    }
}

impl Default for PhoneNumberEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberingEngine for PhoneNumberEngine {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, default_region: Option<&RegionCode>) -> Result<PhoneNumber, EngineError> {
        let country = match default_region {
            Some(region) => Some(Self::country_id(region).ok_or_else(|| {
                EngineError(format!("Unsupported default region {}", region))
            })?),
            None => None,
        };

        // The phonenumber crate unwraps internally on some malformed inputs.
        let result = panic::catch_unwind(move || phonenumber::parse(country, text));
        match result {
            Ok(Ok(number)) => {
                trace!("Parsed {} as {:?}", text, number);
                Ok(number)
            }
            Ok(Err(err)) => {
                debug!("Engine rejected {}: {:?}", text, err);
                let detail = err.to_string();
                if detail.is_empty() {
                    Err(EngineError("The string supplied did not seem to be a phone number".to_owned()))
                } else {
                    Err(EngineError(detail))
                }
            }
            Err(_) => {
                warn!("Engine panicked while parsing {}", text);
                Err(EngineError("The string supplied could not be processed as a phone number".to_owned()))
            }
        }
    }

    fn supports_region(&self, region: &RegionCode) -> bool {
        Self::country_id(region).is_some()
    }

    fn country_code(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn national_significant_number(&self, number: &PhoneNumber) -> String {
        let national = number.national();
        let mut digits = "0".repeat(national.zeros() as usize);
        digits.push_str(itoa::Buffer::new().format(national.value()));
        digits
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn line_type(&self, number: &PhoneNumber) -> i32 {
        self.classify(number).line_type.code()
    }

    fn geocode(&self, number: &PhoneNumber, locale: &str) -> Option<String> {
        if locale != i18n::ENGLISH {
            return None;
        }
        let Classification { line_type, region } = self.classify(number);
        if line_type == LineType::Unknown {
            return None;
        }
        if Self::is_geographical(line_type, self.country_code(number)) {
            if let Some(area) = self.geocoding.lookup_longest(&self.prefix_key(number)) {
                return Some(area.to_owned());
            }
        }
        self.country_names.get(region.as_deref()?).map(str::to_owned)
    }

    fn carrier_name(&self, number: &PhoneNumber, locale: &str) -> Option<String> {
        if locale != i18n::ENGLISH || !self.classify(number).line_type.is_carrier_bound() {
            return None;
        }
        self.carriers
            .lookup_longest(&self.prefix_key(number))
            .map(str::to_owned)
    }

    fn time_zones(&self, number: &PhoneNumber) -> Vec<String> {
        let Classification { line_type, region } = self.classify(number);
        if line_type == LineType::Unknown {
            return Vec::new();
        }
        let by_area = if Self::is_geographical(line_type, self.country_code(number)) {
            self.time_zones.lookup_longest(&self.prefix_key(number))
        } else {
            None
        };
        by_area
            .or_else(|| self.region_time_zones.get(region.as_deref()?))
            .map(|zones| zones.split(TIME_ZONE_SEPARATOR).map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn region_code(&self, number: &PhoneNumber) -> Option<String> {
        self.classify(number).region
    }

    fn format(&self, number: &PhoneNumber, style: FormatStyle) -> String {
        let mode = match style {
            FormatStyle::International => Mode::International,
            FormatStyle::National => Mode::National,
        };
        number.format().mode(mode).to_string()
    }
}
