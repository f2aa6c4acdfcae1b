//! Form input validation and backend outcome mapping.
//!
//! ARCHITECTURE
//! ============
//! Forms are plain data deserialized from the request body. Validation runs
//! before any backend call and yields either a typed request or a catalog
//! message; routes never reach the network with invalid input.

pub mod extraction;
pub mod in_flight;
pub mod login;
pub mod signup;

use crate::i18n::{Text, tr};
use crate::services::locale::Language;
use crate::services::session::SessionToken;

/// A message shown above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Localized catalog text.
    Text(Text),
    /// Backend-supplied text shown verbatim.
    Server(String),
}

impl FormMessage {
    #[must_use]
    pub fn render(&self, lang: Language) -> String {
        match self {
            Self::Text(text) => tr(lang, *text).to_string(),
            Self::Server(message) => message.clone(),
        }
    }
}

/// What a login or signup call means for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(SessionToken),
    Rejected(FormMessage),
}
