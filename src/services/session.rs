//! Session token storage and bootstrap validation.
//!
//! ARCHITECTURE
//! ============
//! The `authToken` cookie is the single source of truth for "is there a
//! session". The route guard only checks its presence. Page handlers call
//! [`bootstrap`] to confirm it with the backend before rendering
//! identity-dependent chrome (header links).
//!
//! TRADE-OFFS
//! ==========
//! A transport failure during validation renders the page as logged-out but
//! keeps the cookie; only an explicit `isValid: false` clears it. A flaky
//! backend therefore never logs anyone out.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::backend::Backend;

pub const AUTH_COOKIE: &str = "authToken";
pub const AUTH_COOKIE_MAX_AGE_DAYS: i64 = 30;

// =============================================================================
// SESSION TOKEN
// =============================================================================

/// An opaque credential issued by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

impl SessionToken {
    /// Wrap a raw token. Empty strings are not tokens.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the persisted token from the request cookies.
    #[must_use]
    pub fn read(jar: &CookieJar) -> Option<Self> {
        jar.get(AUTH_COOKIE).and_then(|c| Self::new(c.value()))
    }

    /// Persist this token for 30 days.
    #[must_use]
    pub fn store(&self, jar: CookieJar, secure: bool) -> CookieJar {
        let cookie = Cookie::build((AUTH_COOKIE, self.0.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(secure)
            .max_age(Duration::days(AUTH_COOKIE_MAX_AGE_DAYS));
        jar.add(cookie)
    }

    /// Expire the persisted token.
    #[must_use]
    pub fn clear(jar: CookieJar, secure: bool) -> CookieJar {
        let cookie = Cookie::build((AUTH_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(secure)
            .max_age(Duration::ZERO);
        jar.add(cookie)
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Authentication state for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub token: Option<SessionToken>,
    /// The backend explicitly rejected the token (expired or revoked).
    pub rejected: bool,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Build the session for a page load.
///
/// No token means no network call. Otherwise one `/validate-token` call
/// decides; any failure yields an unauthenticated session and is only logged.
pub async fn bootstrap(backend: &dyn Backend, token: Option<SessionToken>) -> Session {
    let Some(token) = token else {
        return Session::anonymous();
    };

    match backend.validate_token(token.as_str()).await {
        Ok(true) => Session { is_authenticated: true, token: Some(token), rejected: false },
        Ok(false) => {
            tracing::info!("session token rejected by backend");
            Session { is_authenticated: false, token: None, rejected: true }
        }
        Err(e) => {
            tracing::warn!(error = %e, "session validation failed");
            Session { is_authenticated: false, token: Some(token), rejected: false }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
