use crate::constants::method;

pub(crate) fn is_safe_method(value: &str) -> bool {
    method::SAFE
        .iter()
        .any(|safe| safe.eq_ignore_ascii_case(value))
}

/// Drops a trailing `:port` from a `Host`-style authority. Bracketed IPv6
/// literals keep their brackets.
pub(crate) fn strip_port(authority: &str) -> &str {
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port))
            if !host.contains(':') && port.bytes().all(|byte| byte.is_ascii_digit()) =>
        {
            host
        }
        _ => authority,
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
