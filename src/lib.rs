//! Cross-origin request protection based on `Sec-Fetch-Site` and `Origin`.
//!
//! Configure a [`PolicyStore`] at startup, freeze it into an
//! [`OriginChecker`], and call [`OriginChecker::check`] for each request.
//! Safe methods are never checked; everything else is rejected when the
//! browser reports a cross-origin initiator, unless the origin is trusted or
//! the path matches an insecure bypass pattern.

mod bypass;
mod checker;
pub mod constants;
mod context;
#[cfg(feature = "http")]
mod http;
mod options;
mod origin;
mod policy;
mod result;
mod trusted_origins;
mod util;

pub use bypass::{BypassPatterns, PatternError};
pub use checker::OriginChecker;
pub use context::RequestContext;
pub use options::{ConfigError, ProtectionOptions};
pub use origin::Origin;
pub use policy::PolicyStore;
pub use result::{CheckError, CrossOriginRequestError, Verdict};
pub use trusted_origins::TrustedOrigins;
