//! Extraction (OCR) form.
//!
//! The browser posts `multipart/form-data`; the route feeds each part into
//! [`ExtractionForm`] and then calls [`ExtractionForm::validate`]. Selector
//! fields keep their raw values so a re-rendered form shows what the user
//! picked.

use crate::backend::types::{ExtractionRequest, Upload};
use crate::i18n::Text;

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Translation targets offered by the form: `(code, native name)`.
pub const TARGET_LANGUAGES: [(&str, &str); 8] = [
    ("en", "English"),
    ("pt", "Português"),
    ("es", "Español"),
    ("fr", "Français"),
    ("it", "Italiano"),
    ("de", "Deutsch"),
    ("zh", "中文"),
    ("ja", "日本語"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionForm {
    pub form_id: String,
    pub file: Option<Upload>,
    pub title: String,
    pub translate: String,
    pub target_language: String,
    pub improve_extraction: String,
    pub summarize_text: String,
}

impl Default for ExtractionForm {
    fn default() -> Self {
        Self {
            form_id: String::new(),
            file: None,
            title: String::new(),
            translate: "no".to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            improve_extraction: "no".to_string(),
            summarize_text: "no".to_string(),
        }
    }
}

impl ExtractionForm {
    /// Record a text field by its form name. Unknown names are ignored.
    pub fn set_text(&mut self, name: &str, value: String) {
        match name {
            "form_id" => self.form_id = value,
            "title" => self.title = value,
            "translate" => self.translate = value,
            "targetLanguage" => self.target_language = value,
            "improveExtraction" => self.improve_extraction = value,
            "summarizeText" => self.summarize_text = value,
            _ => {}
        }
    }

    /// Record the uploaded file. An empty part (no file chosen) clears it.
    pub fn set_file(&mut self, upload: Upload) {
        self.file = if upload.bytes.is_empty() && upload.file_name.is_empty() { None } else { Some(upload) };
    }

    #[must_use]
    pub fn wants_translation(&self) -> bool {
        is_yes(&self.translate)
    }

    /// Check the file and title, then build the backend request.
    ///
    /// # Errors
    ///
    /// Returns [`Text::MissingFile`] when no image was chosen, otherwise
    /// [`Text::MissingTitle`] when the title is blank.
    pub fn validate(&self) -> Result<ExtractionRequest, Text> {
        let Some(file) = self.file.as_ref().filter(|f| !f.bytes.is_empty()) else {
            return Err(Text::MissingFile);
        };
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Text::MissingTitle);
        }

        let target_language = self.wants_translation().then(|| {
            let code = self.target_language.trim();
            if code.is_empty() { DEFAULT_TARGET_LANGUAGE.to_string() } else { code.to_string() }
        });

        Ok(ExtractionRequest {
            file: file.clone(),
            title: title.to_string(),
            improve_extraction: is_yes(&self.improve_extraction),
            target_language,
            summarize_text: is_yes(&self.summarize_text),
        })
    }
}

fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
#[path = "extraction_test.rs"]
mod tests;
