use cross_origin_protection::{ConfigError, OriginChecker, PolicyStore, ProtectionOptions};

#[derive(Clone)]
pub struct AppState {
    pub checker: OriginChecker,
    pub greeting: &'static str,
}

#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Pattern(cross_origin_protection::PatternError),
}

pub fn build_state() -> Result<AppState, StartupError> {
    let options = ProtectionOptions {
        trusted_origins: vec!["http://localhost:3000".into()],
        insecure_bypass_patterns: vec!["^/webhooks/".into()],
    };

    let policy = PolicyStore::from_options(options).map_err(StartupError::Config)?;
    let checker = OriginChecker::validated(policy).map_err(StartupError::Pattern)?;

    Ok(AppState {
        checker,
        greeting: "Welcome to the cross-origin protection demo!",
    })
}

pub mod middleware;
