use std::cell::RefCell;

use crate::{
    engine::{FormatStyle, NumberingEngine},
    errors::EngineError,
    i18n::RegionCode,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeNumber {
    country_code: u16,
    national: String,
}

/// Scriptable engine: every query answers with the configured value and
/// parse calls are recorded.
#[derive(Debug)]
pub struct FakeEngine {
    pub reject_with: Option<String>,
    pub country_code: u16,
    pub national: String,
    pub valid: bool,
    pub line_type: i32,
    pub geocode: Option<String>,
    pub carrier: Option<String>,
    pub time_zones: Vec<String>,
    pub region: Option<String>,
    pub(crate) calls: RefCell<Vec<(String, Option<String>)>>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            reject_with: None,
            country_code: 1,
            national: "4155552671".to_owned(),
            valid: true,
            line_type: 2,
            geocode: Some("California".to_owned()),
            carrier: None,
            time_zones: vec!["America/Los_Angeles".to_owned()],
            region: Some("US".to_owned()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeEngine {
    pub fn rejecting(detail: &str) -> Self {
        Self {
            reject_with: Some(detail.to_owned()),
            ..Self::default()
        }
    }

    /// An engine that knows nothing beyond the number itself.
    pub fn blank(country_code: u16, national: &str) -> Self {
        Self {
            country_code,
            national: national.to_owned(),
            valid: false,
            line_type: 99,
            geocode: None,
            carrier: None,
            time_zones: Vec::new(),
            region: None,
            ..Self::default()
        }
    }

    pub fn parse_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_parse(&self) -> Option<(String, Option<String>)> {
        self.calls.borrow().last().cloned()
    }
}

impl NumberingEngine for FakeEngine {
    type Number = FakeNumber;

    fn parse(&self, text: &str, default_region: Option<&RegionCode>) -> Result<FakeNumber, EngineError> {
        self.calls
            .borrow_mut()
            .push((text.to_owned(), default_region.map(|r| r.to_string())));
        if let Some(detail) = &self.reject_with {
            return Err(EngineError(detail.clone()));
        }
        Ok(FakeNumber {
            country_code: self.country_code,
            national: self.national.clone(),
        })
    }

    fn supports_region(&self, region: &RegionCode) -> bool {
        region.as_str() != "XX"
    }

    fn country_code(&self, number: &FakeNumber) -> u16 {
        number.country_code
    }

    fn national_significant_number(&self, number: &FakeNumber) -> String {
        number.national.clone()
    }

    fn is_valid(&self, _number: &FakeNumber) -> bool {
        self.valid
    }

    fn line_type(&self, _number: &FakeNumber) -> i32 {
        self.line_type
    }

    fn geocode(&self, _number: &FakeNumber, _locale: &str) -> Option<String> {
        self.geocode.clone()
    }

    fn carrier_name(&self, _number: &FakeNumber, _locale: &str) -> Option<String> {
        self.carrier.clone()
    }

    fn time_zones(&self, _number: &FakeNumber) -> Vec<String> {
        self.time_zones.clone()
    }

    fn region_code(&self, _number: &FakeNumber) -> Option<String> {
        self.region.clone()
    }

    fn format(&self, number: &FakeNumber, style: FormatStyle) -> String {
        match style {
            FormatStyle::International => format!("+{} {}", number.country_code, number.national),
            FormatStyle::National => number.national.clone(),
        }
    }
}
