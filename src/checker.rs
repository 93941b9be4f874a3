use crate::bypass::PatternError;
use crate::constants::sec_fetch_site;
use crate::context::RequestContext;
use crate::origin;
use crate::policy::PolicyStore;
use crate::result::{CheckError, CrossOriginRequestError, Verdict};
use crate::util::{is_safe_method, strip_port};
use std::sync::Arc;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Classifies requests as same-origin or cross-origin using
/// `Sec-Fetch-Site`, falling back to comparing `Origin` with the target host.
///
/// Cloning is cheap; clones share the same frozen [`PolicyStore`].
#[derive(Debug, Clone, Default)]
pub struct OriginChecker {
    policy: Arc<PolicyStore>,
}

impl OriginChecker {
    pub fn new(policy: PolicyStore) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Like [`OriginChecker::new`], but compiles the bypass patterns first so
    /// a broken pattern fails startup instead of the first request.
    pub fn validated(policy: PolicyStore) -> Result<Self, PatternError> {
        policy.validate()?;
        Ok(Self::new(policy))
    }

    pub fn policy(&self) -> &PolicyStore {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> Result<Verdict, CheckError> {
        if is_safe_method(request.method) {
            return Ok(Verdict::Allowed);
        }

        match request.sec_fetch_site() {
            None => {}
            Some(sec_fetch_site::SAME_ORIGIN | sec_fetch_site::NONE) => {
                return Ok(Verdict::Allowed);
            }
            Some(_) => {
                return self.exempt_or_deny(request, CrossOriginRequestError::SecFetchSite);
            }
        }

        let Some(origin) = request.origin() else {
            // Same-origin, or not a browser at all.
            return Ok(Verdict::Allowed);
        };

        // Host carries no scheme, so http -> https is not detected here.
        if Self::origin_matches_host(origin, request.host()) {
            return Ok(Verdict::Allowed);
        }

        self.exempt_or_deny(request, CrossOriginRequestError::OldBrowser)
    }

    fn exempt_or_deny(
        &self,
        request: &RequestContext<'_>,
        reason: CrossOriginRequestError,
    ) -> Result<Verdict, CheckError> {
        if self.policy.is_exempt(request.path, request.origin())? {
            tracing::trace!(
                method = request.method,
                path = request.path,
                "cross-origin request exempted"
            );
            return Ok(Verdict::Allowed);
        }

        tracing::debug!(
            method = request.method,
            path = request.path,
            reason = ?reason,
            "cross-origin request rejected"
        );
        Ok(Verdict::Denied(reason))
    }

    fn origin_matches_host(origin: &str, host: Option<&str>) -> bool {
        let Some(host) = host else {
            return false;
        };
        if origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        // Parsed origin hosts are always ASCII (IDNA-encoded).
        origin::header_host(origin).is_some_and(|origin_host| {
            origin_host.eq_ignore_ascii_case(strip_port(host))
        })
    }
}

#[cfg(test)]
#[path = "checker_test.rs"]
mod checker_test;
