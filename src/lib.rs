pub mod config;
pub mod engine;
pub mod errors;
pub mod i18n;
pub mod normalizer;
pub mod presenter;
mod regexp_cache;
pub mod render;
pub mod shell;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use engine::{FormatStyle, LineType, NumberingEngine, PhoneNumberEngine};
pub use errors::{AnalysisError, AppError, ConfigError, EngineError};
pub use normalizer::{normalize_and_parse, ParsedNumber};
pub use presenter::{present, AttributeRow, Emphasis, RowGroup};

/// Parses `raw` and derives its display rows in one pass.
pub fn analyze<E: NumberingEngine>(
    engine: &E,
    raw: &str,
    default_region: Option<&i18n::RegionCode>,
) -> Result<Vec<AttributeRow>, AnalysisError> {
    let parsed = normalize_and_parse(engine, raw, default_region)?;
    Ok(present(engine, &parsed))
}
