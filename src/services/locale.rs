//! Display language selection.
//!
//! The active language lives in a browser-session cookie (no `Max-Age`), so
//! it survives navigation but not a browser restart.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Interpret a dropdown value. Only `"en"` selects English; every other
    /// value falls through to Portuguese.
    #[must_use]
    pub fn from_selection(raw: &str) -> Self {
        if raw == "en" { Self::En } else { Self::Pt }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Language carried by the request cookies, English when unset.
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(LANG_COOKIE)
            .map(|c| Self::from_selection(c.value()))
            .unwrap_or_default()
    }

    /// Remember this language for the rest of the browser session.
    #[must_use]
    pub fn store(self, jar: CookieJar, secure: bool) -> CookieJar {
        let cookie = Cookie::build((LANG_COOKIE, self.code()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(secure);
        jar.add(cookie)
    }
}

impl<S> FromRequestParts<S> for Language
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
