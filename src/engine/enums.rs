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

use strum::{Display, EnumIter, FromRepr};

/// Formats the presenter asks the engine for.
///
/// For the Google Switzerland office number:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    /// Country calling code followed by the number grouped for display.
    International,
    /// The number as dialed inside its own country, national prefix included.
    National,
}

/// Categorizes phone numbers based on their primary use.
///
/// Discriminants are the numeric line-type codes of libphonenumber and
/// form a compatibility contract with the engine adapter: an engine that
/// reports a code must use this encoding, and any change on its side has
/// to be mirrored here. Codes outside the table are [`LineType::Unknown`].
#[derive(Debug, Display, EnumIter, FromRepr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum LineType {
    /// Traditional landline tied to a geographic location.
    FixedLine = 0,
    /// Wireless devices like mobile phones.
    Mobile = 1,
    /// Regions (e.g. the USA) where fixed-line and mobile ranges overlap.
    FixedLineOrMobile = 2,
    TollFree = 3,
    PremiumRate = 4,
    SharedCost = 5,
    #[strum(serialize = "VOIP")]
    VoIP = 6,
    PersonalNumber = 7,
    Pager = 8,
    #[strum(serialize = "UAN")]
    Uan = 9,
    #[strum(serialize = "VOICEMAIL")]
    VoiceMail = 10,
    Unknown = 99,
}

impl LineType {
    /// Maps an engine line-type code to its label, never failing.
    pub fn from_code(code: i32) -> Self {
        Self::from_repr(code).unwrap_or(LineType::Unknown)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Types whose number ranges are tied to a geographic area.
    pub fn is_fixed_line_like(self) -> bool {
        matches!(self, LineType::FixedLine | LineType::FixedLineOrMobile)
    }

    /// Types for which an allocating carrier is meaningful.
    pub fn is_carrier_bound(self) -> bool {
        matches!(self, LineType::Mobile | LineType::FixedLineOrMobile | LineType::Pager)
    }
}
