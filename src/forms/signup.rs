//! Signup form.

use serde::Deserialize;

use super::{AuthOutcome, FormMessage};
use crate::backend::types::{AuthReply, BackendError, SignupRequest};
use crate::i18n::Text;
use crate::services::session::SessionToken;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub form_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
}

impl SignupForm {
    /// Check required fields, then the password confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Text::FillAllFields`] for any empty field and
    /// [`Text::PasswordMismatch`] when the confirmation differs.
    pub fn validate(&self) -> Result<SignupRequest, Text> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(Text::FillAllFields);
        }
        if self.password != self.confirm_password {
            return Err(Text::PasswordMismatch);
        }
        Ok(SignupRequest { username: username.to_string(), email: email.to_string(), password: self.password.clone() })
    }
}

/// Map a signup call result onto the session.
///
/// Only 201 with a token signs in. A backend error carrying a `message` is
/// surfaced verbatim.
#[must_use]
pub fn signup_outcome(result: Result<AuthReply, BackendError>) -> AuthOutcome {
    match result {
        Ok(AuthReply { status: 201, token: Some(token) }) => match SessionToken::new(token) {
            Some(token) => AuthOutcome::Authenticated(token),
            None => AuthOutcome::Rejected(FormMessage::Text(Text::SignupFailed)),
        },
        Ok(_) => AuthOutcome::Rejected(FormMessage::Text(Text::SignupFailed)),
        Err(e) => match e.server_message() {
            Some(message) => AuthOutcome::Rejected(FormMessage::Server(message.to_string())),
            None => AuthOutcome::Rejected(FormMessage::Text(Text::GenericError)),
        },
    }
}

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;
