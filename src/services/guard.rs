//! Route guard: path classification and the allow/redirect decision.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function of (token present, path). The middleware in
//! `routes` owns the only side effect: turning a `Redirect` decision into a
//! `303 See Other`.

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const HOME_PATH: &str = "/";

const PUBLIC_AUTH_PATHS: [&str; 2] = [LOGIN_PATH, SIGNUP_PATH];

const ASSET_EXTENSIONS: [&str; 11] = ["svg", "png", "jpg", "jpeg", "gif", "webp", "ico", "woff", "woff2", "ttf", "eot"];

/// How the guard sees a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Never evaluated: API routes, static assets, images, favicon.
    Excluded,
    /// Only reachable without a session (`/login`, `/signup`).
    PublicAuth,
    /// Requires a session.
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if is_excluded(path) {
        RouteClass::Excluded
    } else if PUBLIC_AUTH_PATHS.contains(&path) {
        RouteClass::PublicAuth
    } else {
        RouteClass::Protected
    }
}

/// Decide whether a navigation to `path` may proceed.
#[must_use]
pub fn evaluate(token_present: bool, path: &str) -> GuardDecision {
    match (classify(path), token_present) {
        (RouteClass::Excluded, _) | (RouteClass::PublicAuth, false) | (RouteClass::Protected, true) => {
            GuardDecision::Allow
        }
        (RouteClass::Protected, false) => GuardDecision::Redirect(LOGIN_PATH),
        (RouteClass::PublicAuth, true) => GuardDecision::Redirect(HOME_PATH),
    }
}

fn is_excluded(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") || path.starts_with("/static/") || path == "/favicon.ico" {
        return true;
    }
    has_asset_extension(path)
}

fn has_asset_extension(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    last_segment
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ASSET_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
