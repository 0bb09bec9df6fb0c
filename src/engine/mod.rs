pub mod enums;
mod offline_data;
mod phonenumber_engine;
mod prefix_map;

pub use enums::{FormatStyle, LineType};
pub use phonenumber_engine::PhoneNumberEngine;

use crate::{errors::EngineError, i18n::RegionCode};

/// Numbering-plan engine API used to isolate the underlying
/// implementation of parsing, validation and lookups and allow
/// different implementations to be swapped in easily.
///
/// Lookups return `None` or an empty list when the engine has no data;
/// callers decide how to present that.
pub trait NumberingEngine {
    /// Engine-specific representation of a parsed number.
    type Number;

    /// Parses `text`. Without `default_region` the text must carry an
    /// explicit `+` prefix.
    fn parse(&self, text: &str, default_region: Option<&RegionCode>) -> Result<Self::Number, EngineError>;

    /// Whether `region` can be used as a default region for parsing.
    fn supports_region(&self, region: &RegionCode) -> bool;

    fn country_code(&self, number: &Self::Number) -> u16;

    /// National significant number as digits, leading zeros included.
    fn national_significant_number(&self, number: &Self::Number) -> String;

    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Line-type code in the [`LineType`] encoding.
    fn line_type(&self, number: &Self::Number) -> i32;

    fn geocode(&self, number: &Self::Number, locale: &str) -> Option<String>;

    fn carrier_name(&self, number: &Self::Number, locale: &str) -> Option<String>;

    fn time_zones(&self, number: &Self::Number) -> Vec<String>;

    fn region_code(&self, number: &Self::Number) -> Option<String>;

    fn format(&self, number: &Self::Number, style: FormatStyle) -> String;
}
