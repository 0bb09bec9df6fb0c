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

use log::trace;

use crate::{engine::NumberingEngine, errors::AnalysisError, i18n::RegionCode};

pub const PLUS_SIGN: &str = "+";

/// A successfully parsed number together with the fields every analysis
/// pass needs. Not mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNumber<N> {
    country_code: u16,
    national_number: String,
    number: N,
}

impl<N> ParsedNumber<N> {
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// National significant number, leading zeros included.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// The engine's own representation, used for further queries.
    pub fn number(&self) -> &N {
        &self.number
    }
}

/// Turns raw user text into a [`ParsedNumber`].
///
/// Input without a leading `+` is only accepted when `default_region` is
/// given; the engine then resolves the country calling code from it.
pub fn normalize_and_parse<E: NumberingEngine>(
    engine: &E,
    raw: &str,
    default_region: Option<&RegionCode>,
) -> Result<ParsedNumber<E::Number>, AnalysisError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    if !input.starts_with(PLUS_SIGN) && default_region.is_none() {
        return Err(AnalysisError::MissingCountryPrefix);
    }

    trace!("Parsing {} with default region {:?}", input, default_region);
    let number = engine.parse(input, default_region)?;
    Ok(ParsedNumber {
        country_code: engine.country_code(&number),
        national_number: engine.national_significant_number(&number),
        number,
    })
}
