//! Login form.

use serde::Deserialize;

use super::{AuthOutcome, FormMessage};
use crate::backend::types::{AuthReply, BackendError, Credentials};
use crate::i18n::Text;
use crate::services::session::SessionToken;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub form_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Text::FillAllFields`] when email or password is empty.
    pub fn validate(&self) -> Result<Credentials, Text> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(Text::FillAllFields);
        }
        Ok(Credentials { email: email.to_string(), password: self.password.clone() })
    }
}

/// Map a login call result onto the session.
///
/// 200/201 with a token signs in. Any other 2xx is a credential failure.
/// Every error, including a backend 4xx, is the generic error.
#[must_use]
pub fn login_outcome(result: Result<AuthReply, BackendError>) -> AuthOutcome {
    match result {
        Ok(AuthReply { status: 200 | 201, token: Some(token) }) => match SessionToken::new(token) {
            Some(token) => AuthOutcome::Authenticated(token),
            None => AuthOutcome::Rejected(FormMessage::Text(Text::InvalidCredentials)),
        },
        Ok(_) => AuthOutcome::Rejected(FormMessage::Text(Text::InvalidCredentials)),
        Err(_) => AuthOutcome::Rejected(FormMessage::Text(Text::GenericError)),
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
