//! Application configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup closure so tests can feed a map instead of
//! mutating the process environment. `from_env` is the only caller that
//! touches `std::env`.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 300;
pub const MIN_REDIRECT_DELAY_MS: u64 = 100;
pub const MAX_REDIRECT_DELAY_MS: u64 = 300;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("unknown AUTH_ROUTES: {0} (expected 'auth' or 'user')")]
    UnknownAuthRoutes(String),
}

// =============================================================================
// AUTH ROUTES
// =============================================================================

/// Which family of account endpoints the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRoutes {
    /// `/auth/login`, `/auth/signup`, `/auth/logout`.
    Auth,
    /// `/user/signin`, `/user/signup`, `/user/logout`.
    User,
}

impl AuthRoutes {
    #[must_use]
    pub fn login(self) -> &'static str {
        match self {
            Self::Auth => "/auth/login",
            Self::User => "/user/signin",
        }
    }

    #[must_use]
    pub fn signup(self) -> &'static str {
        match self {
            Self::Auth => "/auth/signup",
            Self::User => "/user/signup",
        }
    }

    #[must_use]
    pub fn logout(self) -> &'static str {
        match self {
            Self::Auth => "/auth/logout",
            Self::User => "/user/logout",
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub port: u16,
    pub auth_routes: AuthRoutes,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    /// Delay before the post-login interstitial navigates to `/`.
    pub redirect_delay_ms: u64,
    /// Directory served under `/static`.
    pub public_dir: PathBuf,
}

impl AppConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `API_URL`: backend base URL (default `http://localhost:3001`)
    /// - `PORT`: listen port (default 3000)
    /// - `APP_ENV`: `production` enables secure cookies
    /// - `COOKIE_SECURE`: explicit override for secure cookies
    /// - `AUTH_ROUTES`: `auth` (default) or `user`
    /// - `REDIRECT_DELAY_MS`: post-login delay, clamped to 100..=300
    /// - `PUBLIC_DIR`: static asset directory
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let auth_routes = parse_auth_routes(lookup("AUTH_ROUTES").as_deref())?;

        let production = lookup("APP_ENV").is_some_and(|v| v.trim().eq_ignore_ascii_case("production"));
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue { key: "COOKIE_SECURE", value: raw })?,
            None => production,
        };

        let redirect_delay_ms = match lookup("REDIRECT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { key: "REDIRECT_DELAY_MS", value: raw.clone() })?
                .clamp(MIN_REDIRECT_DELAY_MS, MAX_REDIRECT_DELAY_MS),
            None => DEFAULT_REDIRECT_DELAY_MS,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_public_dir);

        Ok(Self { api_url, port, auth_routes, cookie_secure, redirect_delay_ms, public_dir })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            port: DEFAULT_PORT,
            auth_routes: AuthRoutes::Auth,
            cookie_secure: false,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            public_dir: default_public_dir(),
        }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Parse the usual boolean spellings (`1/0`, `true/false`, `yes/no`, `on/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_auth_routes(raw: Option<&str>) -> Result<AuthRoutes, ConfigError> {
    match raw.map(str::trim).unwrap_or("auth") {
        "auth" => Ok(AuthRoutes::Auth),
        "user" => Ok(AuthRoutes::User),
        other => Err(ConfigError::UnknownAuthRoutes(other.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
