//! Backend: HTTP client for the remote LangAImage API.
//!
//! DESIGN
//! ======
//! Handlers only see the `Backend` trait so tests can swap in a recording
//! mock. `HttpBackend` is a thin `reqwest` wrapper; parsing helpers are pure
//! functions so they can be tested without a server.
//!
//! The session token rides along as an `authToken` cookie, the same way the
//! browser would send it on a credentialed request.

pub mod types;

use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use axum_extra::extract::cookie::Cookie;

use crate::config::AuthRoutes;
use crate::services::session::AUTH_COOKIE;
use types::{
    AuthReply, BackendError, Credentials, ErrorBody, ExtractionRequest, ExtractionResult, SignupRequest, TokenBody,
    Upload, ValidateTokenBody,
};

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Operations the front end needs from the remote API. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Status`] for non-2xx replies and
    /// [`BackendError::Request`] for transport failures.
    async fn login(&self, credentials: &Credentials) -> Result<AuthReply, BackendError>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::login`]. A JSON `message` on the error body is kept.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthReply, BackendError>;

    /// End the backend session for `token`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx reply.
    async fn logout(&self, token: &str) -> Result<(), BackendError>;

    /// Ask the backend whether `token` is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx reply, or a body
    /// without a readable `isValid` flag.
    async fn validate_token(&self, token: &str) -> Result<bool, BackendError>;

    /// Run OCR (plus any requested AI post-processing) on an uploaded image.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx reply, or a body that
    /// does not decode as an extraction result.
    async fn extract(&self, token: Option<&str>, request: &ExtractionRequest) -> Result<ExtractionResult, BackendError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    routes: AuthRoutes,
}

impl HttpBackend {
    /// Build a client for `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, routes: AuthRoutes) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into(), routes })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_auth<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<AuthReply, BackendError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let cookie_token = token_from_set_cookie(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !is_success(status) {
            return Err(status_error(status, &text));
        }

        let token = token_from_body(&text).or(cookie_token);
        Ok(AuthReply { status, token })
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<AuthReply, BackendError> {
        self.post_auth(self.routes.login(), credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthReply, BackendError> {
        self.post_auth(self.routes.signup(), request).await
    }

    async fn logout(&self, token: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url(self.routes.logout()))
            .header(COOKIE, cookie_header(token))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if is_success(status) {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(status_error(status, &text))
    }

    async fn validate_token(&self, token: &str) -> Result<bool, BackendError> {
        let response = self
            .http
            .get(self.url("/validate-token"))
            .header(COOKIE, cookie_header(token))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !is_success(status) {
            return Err(status_error(status, &text));
        }

        parse_validate_token(&text)
    }

    async fn extract(&self, token: Option<&str>, request: &ExtractionRequest) -> Result<ExtractionResult, BackendError> {
        let mut form = Form::new().part("file", file_part(&request.file));
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }

        let mut builder = self.http.post(self.url("/ocr/extract")).multipart(form);
        if let Some(token) = token {
            builder = builder.header(COOKIE, cookie_header(token));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !is_success(status) {
            return Err(status_error(status, &text));
        }

        parse_extraction(&text)
    }
}

/// The upload as a multipart part. A content type that does not parse is
/// dropped rather than failing the request.
fn file_part(file: &Upload) -> Part {
    let part = || Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
    match &file.content_type {
        Some(content_type) => part().mime_str(content_type).unwrap_or_else(|e| {
            tracing::debug!(error = %e, content_type = %content_type, "sending upload without content type");
            part()
        }),
        None => part(),
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn cookie_header(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}")
}

/// Build a status error, keeping a non-empty JSON `message` if the body has one.
pub(crate) fn status_error(status: u16, body: &str) -> BackendError {
    BackendError::Status { status, message: error_message(body) }
}

pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

pub(crate) fn token_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<TokenBody>(body)
        .ok()
        .and_then(|b| b.token)
        .filter(|t| !t.is_empty())
}

/// Find a non-empty `authToken` among raw `Set-Cookie` header values.
pub(crate) fn token_from_set_cookie<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    values
        .filter_map(|raw| Cookie::parse(raw).ok())
        .find(|cookie| cookie.name() == AUTH_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

pub(crate) fn parse_validate_token(body: &str) -> Result<bool, BackendError> {
    serde_json::from_str::<ValidateTokenBody>(body)
        .map(|b| b.is_valid)
        .map_err(|e| BackendError::Parse(e.to_string()))
}

pub(crate) fn parse_extraction(body: &str) -> Result<ExtractionResult, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
