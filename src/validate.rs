//! Shape checks for credentials and service URLs.
//!
//! These never touch the network and never verify a token signature.

/// Domain suffix every accepted service URL must end with.
pub const REQUIRED_URL_SUFFIX: &str = ".turso.io";

/// Scheme alias accepted on input and rewritten to `https`.
pub const LIBSQL_SCHEME: &str = "libsql";

const HTTPS_SCHEME: &str = "https";

/// Returns `true` if `token` is three non-empty dot-separated segments
/// (`header.payload.signature`).
pub fn is_valid_credential_structure(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let parts: Vec<&str> = token.split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| !part.is_empty())
}

/// Returns `true` if `url` is `https://` or `libsql://` and ends with
/// [`REQUIRED_URL_SUFFIX`].
///
/// The domain check is a plain suffix match on the whole string, not a
/// host-boundary check.
pub fn is_valid_service_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let parts: Vec<&str> = url.split("://").collect();
    if parts.len() != 2 {
        return false;
    }

    let scheme = parts[0];
    if scheme != HTTPS_SCHEME && scheme != LIBSQL_SCHEME {
        return false;
    }

    url.ends_with(REQUIRED_URL_SUFFIX)
}

/// Rewrites a leading `libsql://` to `https://`, leaving the rest untouched.
pub fn normalize_service_url(url: &str) -> String {
    match url.strip_prefix("libsql://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_owned(),
    }
}
