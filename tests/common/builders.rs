use cross_origin_protection::constants::method;
use cross_origin_protection::{OriginChecker, PolicyStore, RequestContext, Verdict};

pub const HOST: &str = "example.com";

#[derive(Default)]
pub struct CheckerBuilder {
    trusted_origins: Vec<String>,
    bypass_patterns: Vec<String>,
}

impl CheckerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trusted_origin(mut self, origin: impl Into<String>) -> Self {
        self.trusted_origins.push(origin.into());
        self
    }

    pub fn bypass_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.bypass_patterns.push(pattern.into());
        self
    }

    pub fn build(self) -> OriginChecker {
        let mut policy = PolicyStore::new();
        for origin in self.trusted_origins {
            policy
                .add_trusted_origin(origin)
                .expect("valid trusted origin");
        }
        for pattern in self.bypass_patterns {
            policy
                .add_insecure_bypass_pattern(pattern)
                .expect("non-empty bypass pattern");
        }
        OriginChecker::validated(policy).expect("bypass patterns compile")
    }
}

pub struct RequestBuilder {
    method: String,
    host: Option<String>,
    path: String,
    sec_fetch_site: Option<String>,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            host: Some(HOST.into()),
            path: "/".into(),
            sec_fetch_site: None,
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn sec_fetch_site(mut self, value: impl Into<String>) -> Self {
        self.sec_fetch_site = Some(value.into());
        self
    }

    pub fn origin(mut self, value: impl Into<String>) -> Self {
        self.origin = Some(value.into());
        self
    }

    pub fn check(self, checker: &OriginChecker) -> Verdict {
        let ctx = RequestContext {
            method: &self.method,
            host: self.host.as_deref(),
            path: &self.path,
            sec_fetch_site: self.sec_fetch_site.as_deref(),
            origin: self.origin.as_deref(),
        };
        checker
            .check(&ctx)
            .expect("request evaluation should succeed")
    }
}

pub fn checker() -> CheckerBuilder {
    CheckerBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
