//! Builds a [`RequestContext`] from `http` crate request types.

use crate::constants::header;
use crate::context::RequestContext;
use crate::util::strip_port;
use ::http::request::Parts;
use ::http::{HeaderMap, Method, Request, Uri};

/// Stand-in for an `Origin` header that is present but not valid ASCII. It
/// never parses to a host and is never a trusted origin.
const UNREADABLE_ORIGIN: &str = "null";

/// Stand-in for a `Sec-Fetch-Site` header that is present but not valid
/// ASCII. It is neither `same-origin` nor `none`, so the request still needs
/// an exemption.
const UNREADABLE_SEC_FETCH_SITE: &str = "unreadable";

impl<'a> RequestContext<'a> {
    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        Self::from_components(request.method(), request.uri(), request.headers())
    }

    pub fn from_parts(parts: &'a Parts) -> Self {
        Self::from_components(&parts.method, &parts.uri, &parts.headers)
    }

    fn from_components(method: &'a Method, uri: &'a Uri, headers: &'a HeaderMap) -> Self {
        let origin = headers
            .get(header::ORIGIN)
            .map(|value| value.to_str().unwrap_or(UNREADABLE_ORIGIN));
        let sec_fetch_site = headers
            .get(header::SEC_FETCH_SITE)
            .map(|value| value.to_str().unwrap_or(UNREADABLE_SEC_FETCH_SITE));

        Self {
            method: method.as_str(),
            host: target_host(uri, headers),
            path: uri.path(),
            sec_fetch_site,
            origin,
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn target_host<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> Option<&'a str> {
    uri.host()
        .or_else(|| header_str(headers, header::HOST).map(strip_port))
        .filter(|host| !host.is_empty())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
