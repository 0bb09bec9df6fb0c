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

use crate::{
    engine::{FormatStyle, LineType, NumberingEngine},
    i18n,
    normalizer::ParsedNumber,
};

pub const UNKNOWN: &str = "Unknown";
pub const TIME_ZONE_SEPARATOR: &str = ", ";
pub const AREA_CODE_LEN: usize = 3;
pub const PREFIX_LEN: usize = 4;

/// Values for attributes that cannot be derived offline. An honest
/// "not available" is shown instead of a guess.
pub mod placeholders {
    pub const SIM_TYPE: &str = "Not available (carrier-specific)";
    pub const CALL_TYPE: &str = "Context-dependent (not inferred)";
    pub const RISK: &str = "Not available in this offline tool";
    pub const CARRIER_KNOWN: &str = "Not confirmed (no live carrier lookup)";
    pub const ROAMING: &str = "Check with the carrier";
}

/// Color tone a row is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Blue,
    Red,
    Cyan,
    Magenta,
    Green,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowGroup {
    /// Values derived from the number through the engine.
    Derived,
    /// Fixed "not available" rows.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub emphasis: Emphasis,
    pub group: RowGroup,
}

impl AttributeRow {
    fn derived(label: &'static str, icon: &'static str, value: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            label,
            icon,
            value: value.into(),
            emphasis,
            group: RowGroup::Derived,
        }
    }

    fn placeholder(label: &'static str, icon: &'static str, value: &'static str, emphasis: Emphasis) -> Self {
        Self {
            label,
            icon,
            value: value.to_owned(),
            emphasis,
            group: RowGroup::Placeholder,
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

/// First `count` characters of `digits`, or all of them when shorter.
pub fn leading_digits(digits: &str, count: usize) -> &str {
    digits
        .char_indices()
        .nth(count)
        .map_or(digits, |(end, _)| &digits[..end])
}

/// Derives the fixed, ordered list of display rows for `parsed`.
///
/// Never fails: a query that comes back empty is shown as [`UNKNOWN`],
/// an unrecognized line-type code as `UNKNOWN`, and attributes the engine
/// cannot provide are filled with [`placeholders`].
pub fn present<E: NumberingEngine>(engine: &E, parsed: &ParsedNumber<E::Number>) -> Vec<AttributeRow> {
    let number = parsed.number();
    let national = parsed.national_number();

    let location = or_unknown(engine.geocode(number, i18n::ENGLISH));
    let carrier = or_unknown(engine.carrier_name(number, i18n::ENGLISH));
    let line_type = LineType::from_code(engine.line_type(number));
    let time_zones: Vec<String> = engine
        .time_zones(number)
        .into_iter()
        .filter(|zone| !zone.is_empty())
        .collect();
    let time_zones = if time_zones.is_empty() {
        UNKNOWN.to_owned()
    } else {
        time_zones.join(TIME_ZONE_SEPARATOR)
    };
    let valid = if engine.is_valid(number) { "Yes" } else { "No" };

    let mut buffer = itoa::Buffer::new();
    let country_code = buffer.format(parsed.country_code()).to_owned();
    let length = format!("{} digits", national.chars().count());

    vec![
        AttributeRow::derived("Location", "📍", location, Emphasis::Blue),
        AttributeRow::derived("Carrier", "📡", carrier, Emphasis::Red),
        AttributeRow::derived("Type", "📞", line_type.to_string(), Emphasis::Cyan),
        AttributeRow::derived("Time Zone", "🕰️", time_zones, Emphasis::Magenta),
        AttributeRow::derived(
            "International Format",
            "🌍",
            engine.format(number, FormatStyle::International),
            Emphasis::Green,
        ),
        AttributeRow::derived(
            "National Format",
            "📞",
            engine.format(number, FormatStyle::National),
            Emphasis::Green,
        ),
        AttributeRow::derived("Country Code", "🌎", country_code, Emphasis::Yellow),
        AttributeRow::derived("Number Length", "🔢", length, Emphasis::Green),
        AttributeRow::derived("Valid Number", "✔️", valid, Emphasis::Red),
        AttributeRow::derived("Region Code", "🏙️", or_unknown(engine.region_code(number)), Emphasis::Cyan),
        AttributeRow::derived(
            "Area Code (heuristic)",
            "📶",
            leading_digits(national, AREA_CODE_LEN),
            Emphasis::Magenta,
        ),
        AttributeRow::derived("Prefix (heuristic)", "🔠", leading_digits(national, PREFIX_LEN), Emphasis::Yellow),
        AttributeRow::placeholder("SIM Type", "💳", placeholders::SIM_TYPE, Emphasis::Green),
        AttributeRow::placeholder("Call Type", "📞", placeholders::CALL_TYPE, Emphasis::Cyan),
        AttributeRow::placeholder("Risk/Spam/Breach", "⚠️", placeholders::RISK, Emphasis::Red),
        AttributeRow::placeholder("Carrier Known", "📡", placeholders::CARRIER_KNOWN, Emphasis::Cyan),
        AttributeRow::placeholder("Roaming", "🌍", placeholders::ROAMING, Emphasis::Magenta),
    ]
}
