//! Session cookie transport
//!
//! Carries a `SessionId` in the `leafid_session` cookie. Validation is
//! delegated to the configured `SessionIdentityProvider`.

use axum::http::{header::COOKIE, HeaderMap};

use crate::services::session::{SessionId, SessionIdentityProvider};

/// Cookie holding the session token
pub const SESSION_COOKIE: &str = "leafid_session";

/// Session carried by the request, if any and well formed
pub fn session_from_headers(
    headers: &HeaderMap,
    provider: &dyn SessionIdentityProvider,
) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, token)| provider.validate(token.trim()))
}

/// `Set-Cookie` value for a session
pub fn session_cookie(session: &SessionId) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax",
        SESSION_COOKIE, session
    )
}
