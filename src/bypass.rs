use crate::options::ConfigError;
use once_cell::sync::OnceCell;
use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error, Clone)]
pub enum PatternError {
    #[error("failed to compile bypass patterns")]
    Build(#[source] Arc<BuildError>),
    #[error("combined bypass pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Ordered regex fragments matched against request paths.
///
/// All fragments are joined into one case-insensitive alternation that is
/// compiled on first use and cached until the next fragment is pushed.
#[derive(Debug, Clone, Default)]
pub struct BypassPatterns {
    patterns: Vec<String>,
    compiled: OnceCell<Result<Regex, PatternError>>,
}

impl BypassPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, pattern: S) -> Result<(), ConfigError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }

        self.patterns.push(pattern);
        self.compiled = OnceCell::new();
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, path: &str) -> Result<bool, PatternError> {
        if self.patterns.is_empty() {
            return Ok(false);
        }

        Ok(self.compiled()?.is_match(path))
    }

    /// Compiles the combined pattern now instead of on the first request.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.patterns.is_empty() {
            return Ok(());
        }

        self.compiled().map(|_| ())
    }

    fn compiled(&self) -> Result<&Regex, PatternError> {
        self.compiled
            .get_or_init(|| compile_alternation(&self.patterns))
            .as_ref()
            .map_err(PatternError::clone)
    }

    #[cfg(test)]
    pub(crate) fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }
}

fn compile_alternation(patterns: &[String]) -> Result<Regex, PatternError> {
    let alternation = patterns.join("|");
    if alternation.len() > MAX_PATTERN_LENGTH {
        tracing::error!(
            length = alternation.len(),
            max = MAX_PATTERN_LENGTH,
            "bypass patterns are too long"
        );
        return Err(PatternError::TooLong {
            length: alternation.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    Regex::new(&format!("(?i:{alternation})")).map_err(|err| {
        tracing::error!(error = %err, patterns = patterns.len(), "failed to compile bypass patterns");
        PatternError::Build(Arc::new(err))
    })
}

#[cfg(test)]
#[path = "bypass_test.rs"]
mod bypass_test;
