use crate::bypass::{BypassPatterns, PatternError};
use crate::options::{ConfigError, ProtectionOptions};
use crate::origin::Origin;
use crate::trusted_origins::TrustedOrigins;

/// Trusted origins and bypass patterns, configured once before traffic starts.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    trusted_origins: TrustedOrigins,
    bypass_patterns: BypassPatterns,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: ProtectionOptions) -> Result<Self, ConfigError> {
        let mut store = Self::new();
        for origin in options.trusted_origins {
            store.add_trusted_origin(origin)?;
        }
        for pattern in options.insecure_bypass_patterns {
            store.add_insecure_bypass_pattern(pattern)?;
        }
        Ok(store)
    }

    /// Allows every request whose `Origin` header exactly matches `origin`.
    ///
    /// Accepts anything convertible into an [`Origin`]: strings of the form
    /// `scheme://host[:port]`, parsed `url::Url` values, or an `Origin`.
    pub fn add_trusted_origin<O>(&mut self, origin: O) -> Result<(), ConfigError>
    where
        O: TryInto<Origin>,
        O::Error: Into<ConfigError>,
    {
        let origin = origin.try_into().map_err(Into::<ConfigError>::into)?;
        if self.trusted_origins.insert(&origin) {
            tracing::debug!(%origin, "added trusted origin");
        }
        Ok(())
    }

    /// Exempts every request whose path matches `pattern` (case-insensitive,
    /// unanchored) from the check.
    pub fn add_insecure_bypass_pattern<S: Into<String>>(
        &mut self,
        pattern: S,
    ) -> Result<(), ConfigError> {
        let pattern = pattern.into();
        self.bypass_patterns.push(pattern.as_str())?;
        tracing::debug!(%pattern, "added insecure bypass pattern");
        Ok(())
    }

    pub fn is_exempt(&self, path: &str, origin: Option<&str>) -> Result<bool, PatternError> {
        if self.bypass_patterns.matches(path)? {
            return Ok(true);
        }

        Ok(origin.is_some_and(|origin| !origin.is_empty() && self.is_trusted(origin)))
    }

    pub fn is_trusted(&self, origin: &str) -> bool {
        self.trusted_origins.contains(origin)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        self.bypass_patterns.validate()
    }

    pub fn trusted_origins(&self) -> impl Iterator<Item = &str> {
        self.trusted_origins.iter()
    }

    pub fn bypass_patterns(&self) -> &[String] {
        self.bypass_patterns.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn bypass(&self) -> &BypassPatterns {
        &self.bypass_patterns
    }
}

impl TryFrom<ProtectionOptions> for PolicyStore {
    type Error = ConfigError;

    fn try_from(options: ProtectionOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
