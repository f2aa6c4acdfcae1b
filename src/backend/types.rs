//! Backend wire types and errors.
//!
//! Request bodies mirror what the LangAImage API expects. Response types
//! tolerate missing fields so a partial reply still renders.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend client operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend response error: status {status}")]
    Status {
        status: u16,
        /// Structured `message` from the JSON error body, when present.
        message: Option<String>,
    },

    /// A success body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl BackendError {
    /// HTTP status of a non-success reply, if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied error message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

// =============================================================================
// ACCOUNT REQUESTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Outcome of a login or signup call that returned a 2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReply {
    pub status: u16,
    /// Session token from the JSON body or an `authToken` cookie.
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenBody {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateTokenBody {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// An uploaded image file as received from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A validated extraction submission, ready for the multipart call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub file: Upload,
    pub title: String,
    pub improve_extraction: bool,
    /// Present only when translation was requested.
    pub target_language: Option<String>,
    pub summarize_text: bool,
}

impl ExtractionRequest {
    /// Text fields of the multipart payload, in submission order.
    ///
    /// Optional AI flags appear only when requested.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("title", self.title.clone())];
        if self.improve_extraction {
            fields.push(("improveExtraction", "yes".to_string()));
        }
        if let Some(lang) = &self.target_language {
            fields.push(("targetLanguage", lang.clone()));
        }
        if self.summarize_text {
            fields.push(("summarizeText", "yes".to_string()));
        }
        fields
    }
}

/// Texts returned by `/ocr/extract`. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionResult {
    pub original_extraction: String,
    pub improved_extraction: String,
    pub translated_text: String,
    pub summarized_text: String,
}

/// Identifies one section of an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    Original,
    Improved,
    Translated,
    Summarized,
}

impl ExtractionResult {
    /// Non-empty sections in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<(ResultSection, &str)> {
        [
            (ResultSection::Original, self.original_extraction.as_str()),
            (ResultSection::Improved, self.improved_extraction.as_str()),
            (ResultSection::Translated, self.translated_text.as_str()),
            (ResultSection::Summarized, self.summarized_text.as_str()),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .collect()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
