use crate::bypass::PatternError;
use std::fmt;
use thiserror::Error;

/// Why a request was rejected. The messages are stable and never include
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossOriginRequestError {
    /// `Sec-Fetch-Site` reported a cross-origin initiator.
    SecFetchSite,
    /// No `Sec-Fetch-Site`, and `Origin` names a different host.
    OldBrowser,
}

impl CrossOriginRequestError {
    pub fn message(&self) -> &'static str {
        match self {
            CrossOriginRequestError::SecFetchSite => {
                "cross-origin request detected from Sec-Fetch-Site header"
            }
            CrossOriginRequestError::OldBrowser => {
                "cross-origin request detected, and/or browser is out of date: Sec-Fetch-Site is missing, and Origin does not match Host"
            }
        }
    }
}

impl fmt::Display for CrossOriginRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CrossOriginRequestError {}

/// Outcome of checking a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Verdict {
    Allowed,
    Denied(CrossOriginRequestError),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    pub fn reason(&self) -> Option<CrossOriginRequestError> {
        match self {
            Verdict::Allowed => None,
            Verdict::Denied(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), CrossOriginRequestError> {
        match self {
            Verdict::Allowed => Ok(()),
            Verdict::Denied(reason) => Err(reason),
        }
    }
}

/// Errors that prevent a request from being classified at all.
#[derive(Debug, Error, Clone)]
pub enum CheckError {
    #[error("bypass patterns are misconfigured")]
    BypassPatterns(#[from] PatternError),
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
