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

use thiserror::Error;

use crate::config::DEFAULT_REGION_ENV;

/// Reasons why raw user input could not be turned into a phone number.
///
/// All variants are recoverable: they are shown to the user as a single
/// line and the interactive loop moves on to the next prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Please enter a phone number.")]
    EmptyInput,
    /// The input has no `+` prefix and no default region is configured.
    #[error(
        "Use E.164 with '+', e.g., +14155552671. Or set {} to allow national inputs.",
        DEFAULT_REGION_ENV
    )]
    MissingCountryPrefix,
    /// The numbering-plan engine rejected the input.
    #[error("Parse error: {0}")]
    ParseFailure(String),
}

impl From<EngineError> for AnalysisError {
    fn from(value: EngineError) -> Self {
        AnalysisError::ParseFailure(value.0)
    }
}

/// Rejection reason reported by the numbering-plan engine, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid region code '{0}': expected a two-letter ISO 3166-1 code")]
    InvalidRegionCode(String),
    #[error("Region '{0}' is not supported by the numbering-plan engine")]
    UnsupportedRegion(String),
}

/// Fatal errors that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),
}
