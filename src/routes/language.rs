//! `POST /api/language`: header language switch.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::services::guard::HOME_PATH;
use crate::services::locale::Language;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LanguageForm {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub return_to: String,
}

pub async fn select(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LanguageForm>,
) -> (CookieJar, Redirect) {
    let lang = Language::from_selection(&form.language);
    let jar = lang.store(jar, state.config.cookie_secure);
    (jar, Redirect::to(local_path(&form.return_to)))
}

/// Accept only same-origin absolute paths; everything else goes home.
pub(crate) fn local_path(raw: &str) -> &str {
    let is_local = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    if is_local { raw } else { HOME_PATH }
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
