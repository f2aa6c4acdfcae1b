//! `POST /extract`: OCR submission.

use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use super::pages::home_response;
use crate::backend::types::Upload;
use crate::forms::extraction::ExtractionForm;
use crate::forms::in_flight::{Admission, new_form_id};
use crate::i18n::{Text, tr};
use crate::pages::extraction::ExtractionView;
use crate::services::locale::Language;
use crate::services::session::SessionToken;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

pub async fn submit(State(state): State<AppState>, lang: Language, jar: CookieJar, mut multipart: Multipart) -> Response {
    // The guard already required the cookie; the header follows it.
    let token = SessionToken::read(&jar);
    let authenticated = token.is_some();

    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable extraction upload");
            let page = failed_page(ExtractionForm::default(), lang, Text::GenericError);
            return home_response(StatusCode::BAD_REQUEST, lang, authenticated, page);
        }
    };

    let request = match form.validate() {
        Ok(request) => request,
        Err(text) => {
            return home_response(StatusCode::UNPROCESSABLE_ENTITY, lang, authenticated, failed_page(form, lang, text));
        }
    };

    let _in_flight = match state.in_flight.admit(&form.form_id) {
        Admission::Tracked(guard) => Some(guard),
        Admission::Untracked => None,
        Admission::Busy => {
            let page = ExtractionView {
                form_id: form.form_id.clone(),
                message: Some(tr(lang, Text::SubmissionInProgress).to_string()),
                busy: true,
                form,
                result: None,
            };
            return home_response(StatusCode::CONFLICT, lang, authenticated, page);
        }
    };

    match state.backend.extract(token.as_ref().map(SessionToken::as_str), &request).await {
        Ok(result) => {
            tracing::info!(
                improve = request.improve_extraction,
                translate = request.target_language.is_some(),
                summarize = request.summarize_text,
                "extraction succeeded"
            );
            let page = ExtractionView { form_id: new_form_id(), result: Some(result), form, ..ExtractionView::default() };
            home_response(StatusCode::OK, lang, authenticated, page)
        }
        Err(e) => {
            tracing::error!(error = %e, "extraction request failed");
            home_response(StatusCode::BAD_GATEWAY, lang, authenticated, failed_page(form, lang, Text::ExtractFailed))
        }
    }
}

/// Re-render the submitted values under a fresh form id with `text` as alert.
fn failed_page(form: ExtractionForm, lang: Language, text: Text) -> ExtractionView {
    ExtractionView {
        form_id: new_form_id(),
        message: Some(tr(lang, text).to_string()),
        form,
        ..ExtractionView::default()
    }
}

/// Collect the multipart parts into the form. Unknown parts are ignored.
async fn read_form(multipart: &mut Multipart) -> Result<ExtractionForm, MultipartError> {
    let mut form = ExtractionForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await?.to_vec();
            form.set_file(Upload { file_name, content_type, bytes });
        } else {
            let value = field.text().await?;
            form.set_text(&name, value);
        }
    }
    Ok(form)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
