use crate::options::ConfigError;
use std::fmt;
use std::str::FromStr;
use url::{ParseError, Url};

/// A validated `scheme://host[:port]` triple.
///
/// Scheme and host are kept in the lowercase form produced by the URL
/// parser, and a port equal to the scheme's default is dropped, so
/// `https://A.test:443` and `https://a.test` are the same origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(input).map_err(|source| match source {
            ParseError::RelativeUrlWithoutBase => ConfigError::MissingScheme {
                origin: input.to_owned(),
            },
            ParseError::EmptyHost => ConfigError::MissingHost {
                origin: input.to_owned(),
            },
            source => ConfigError::InvalidOrigin {
                origin: input.to_owned(),
                source,
            },
        })?;

        Self::reject_lenient_spelling(input)?;
        Self::from_url(&url)
    }

    /// The URL parser forgives `https:host` and hides a lone trailing `/`;
    /// neither is an origin as a browser would send it.
    fn reject_lenient_spelling(input: &str) -> Result<(), ConfigError> {
        let Some((_, rest)) = input.split_once(':') else {
            return Ok(());
        };

        let Some(authority) = rest.strip_prefix("//") else {
            return Err(ConfigError::MissingHost {
                origin: input.to_owned(),
            });
        };

        if authority.contains(['/', '\\']) {
            return Err(ConfigError::PathQueryOrFragment {
                origin: input.to_owned(),
            });
        }

        Ok(())
    }

    /// Validates an already-parsed URL. A bare `/` path is accepted here
    /// because `Url` serialises `https://host` and `https://host/` the same.
    pub fn from_url(url: &Url) -> Result<Self, ConfigError> {
        if url.scheme().is_empty() {
            return Err(ConfigError::MissingScheme {
                origin: url.to_string(),
            });
        }

        let Some(host) = url.host_str().filter(|host| !host.is_empty()) else {
            return Err(ConfigError::MissingHost {
                origin: url.to_string(),
            });
        };

        let has_path = !matches!(url.path(), "" | "/");
        let has_query = url.query().is_some_and(|query| !query.is_empty());
        let has_fragment = url.fragment().is_some_and(|fragment| !fragment.is_empty());
        if has_path || has_query || has_fragment {
            return Err(ConfigError::PathQueryOrFragment {
                origin: url.to_string(),
            });
        }

        Ok(Self {
            scheme: url.scheme().to_owned(),
            host: host.to_owned(),
            port: url.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for Origin {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Origin {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Origin {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for Origin {
    type Error = ConfigError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<Url> for Origin {
    type Error = ConfigError;

    fn try_from(value: Url) -> Result<Self, Self::Error> {
        Self::from_url(&value)
    }
}

impl TryFrom<&Url> for Origin {
    type Error = ConfigError;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        Self::from_url(value)
    }
}

/// Host of an `Origin` header value, or `None` when it cannot be parsed.
pub(crate) fn header_host(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
