use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::config::AppConfig;

/// AuthToken
///
/// The resolved credential of an incoming request: the value of the named
/// auth cookie, if one was sent. This is the sole input the access gate uses
/// to tell signed-in visitors from anonymous ones. The value is opaque and
/// is never validated beyond its presence (see `gate::PresenceOnlyAuthPolicy`).
#[derive(Debug, Clone)]
pub struct AuthToken(pub Option<String>);

/// AuthToken Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthToken usable as a
/// function argument in the gate middleware (and any handler that wants it).
/// The cookie name is not hardcoded: it is read from the gate policy inside
/// the shared AppConfig, so the extractor follows whatever name the
/// deployment configured.
///
/// Rejection: none. Resolution is total, so a request without the cookie
/// simply extracts as `AuthToken(None)`. The gate, not the extractor, decides
/// what an absent credential means for the request.
impl<S> FromRequestParts<S> for AuthToken
where
    // S must allow sending across threads and sharing.
    S: Send + Sync,
    // Allows the extractor to pull the AppConfig (for the cookie name).
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        Ok(AuthToken(credential_from_headers(
            &parts.headers,
            &config.gate.cookie_name,
        )))
    }
}

/// credential_from_headers
///
/// Resolves the named credential cookie out of a request's headers.
///
/// The Cookie header is split on ';', each pair is trimmed and split on the
/// first '=' only (cookie values may themselves contain '='), and the first
/// pair whose name matches wins. Every malformed shape maps to "absent"
/// rather than an error: a missing header, a header that is not valid UTF-8,
/// or no cookie under the configured name all yield `None`.
///
/// An **empty cookie value also resolves to `None`**. An empty value is what
/// a cleared cookie looks like after logout ("auth-token=;"), and counting it
/// as a live credential would bounce logged-out visitors straight back into
/// the signed-in pages.
pub fn credential_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';')
        .find_map(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(name), Some(value)) if name == cookie_name => Some(value.to_string()),
                _ => None,
            }
        })
        // Empty means "cleared", not "signed in".
        .filter(|value| !value.is_empty())
}
