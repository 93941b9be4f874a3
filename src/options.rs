use std::convert::Infallible;
use thiserror::Error;

/// Declarative configuration for a [`PolicyStore`](crate::PolicyStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ProtectionOptions {
    /// Origins of the form `scheme://host[:port]` whose requests are always allowed.
    pub trusted_origins: Vec<String>,
    /// Regex fragments; a request whose path matches any of them skips the check.
    pub insecure_bypass_patterns: Vec<String>,
}

/// Raised while building a policy from malformed configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid origin {origin}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid origin {origin}: scheme is required")]
    MissingScheme { origin: String },
    #[error("invalid origin {origin}: host is required")]
    MissingHost { origin: String },
    #[error("invalid origin {origin}: path, query, and fragment are not allowed")]
    PathQueryOrFragment { origin: String },
    #[error("bypass pattern must not be empty")]
    EmptyPattern,
}

impl From<Infallible> for ConfigError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
