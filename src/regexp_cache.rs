use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct ErrorInvalidRegex(#[from] regex::Error);

/// Compiled patterns keyed by their source, shared across lookups.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, ErrorInvalidRegex> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Whether `pattern` matches the whole of `s`. Metadata patterns are
    /// stored unanchored, so the anchored form is compiled and cached.
    pub fn full_match(&self, pattern: &str, s: &str) -> Result<bool, ErrorInvalidRegex> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(self.get_regex(&anchored)?.is_match(s))
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
