//! # Admin Session Guard
//!
//! The admin capability is a single deterministic token derived from the
//! configured shared secret: `hex(sha256(secret || salt))`. Exactly one
//! valid token value exists at any time, there is no server-side session
//! table, and the "session" is fully reconstructible from the secret. The
//! consequence, accepted for a single-operator deployment, is that
//! individual sessions cannot be revoked without rotating the secret.
//!
//! The token lives in an http-only cookie with a 24-hour lifetime; the
//! cookie expiry is the only time bound, nothing is tracked server-side.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sha2::{Digest, Sha256};

pub const SESSION_COOKIE: &str = "admin_session";
const SESSION_SALT: &str = "seenfit-admin-v1";
const SESSION_TTL_HOURS: i64 = 24;

/// Derives the one valid session token from the configured secret.
pub fn session_token(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(SESSION_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compares the candidate secret against the configured one by comparing
/// derived tokens. On a match returns the credential to store in the
/// session cookie; on mismatch returns nothing, with no distinguishing
/// detail for the caller to surface.
pub fn issue(candidate: &str, configured_secret: &str) -> Option<String> {
    let expected = session_token(configured_secret);
    if session_token(candidate) == expected {
        Some(expected)
    } else {
        None
    }
}

/// True iff the presented cookie equals the derived token.
pub fn check(jar: &CookieJar, configured_secret: &str) -> bool {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value() == session_token(configured_secret))
        .unwrap_or(false)
}

/// Builds the credential cookie: http-only, lax, 24-hour lifetime, secure
/// outside local development.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(SESSION_TTL_HOURS))
        .build()
}

/// Cookie handed to `CookieJar::remove` on logout.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
