//! Page GET handlers and the shared home-page response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;

use super::page_session;
use crate::forms::in_flight::new_form_id;
use crate::pages::contact::ContactPage;
use crate::pages::extraction::{ExtractionPage, ExtractionView};
use crate::pages::{Chrome, render_page};
use crate::services::guard::HOME_PATH;
use crate::services::locale::Language;
use crate::state::AppState;

/// `GET /`: extraction form.
pub async fn home(State(state): State<AppState>, lang: Language, jar: CookieJar) -> Response {
    let (jar, session) = match page_session(&state, jar).await {
        Ok(found) => found,
        Err(redirect) => return redirect,
    };
    let page = ExtractionView { form_id: new_form_id(), ..ExtractionView::default() };
    (jar, home_response(StatusCode::OK, lang, session.is_authenticated, page)).into_response()
}

/// `GET /contact`
pub async fn contact(State(state): State<AppState>, lang: Language, jar: CookieJar) -> Response {
    let (jar, session) = match page_session(&state, jar).await {
        Ok(found) => found,
        Err(redirect) => return redirect,
    };
    let chrome = Chrome::new(lang, session.is_authenticated, "/contact");
    let html = render_page(chrome, move || view! { <ContactPage lang=lang/> });
    (jar, Html(html)).into_response()
}

/// Render the home page with `status`.
pub(crate) fn home_response(status: StatusCode, lang: Language, authenticated: bool, page: ExtractionView) -> Response {
    let chrome = Chrome::new(lang, authenticated, HOME_PATH);
    let html = render_page(chrome, move || view! { <ExtractionPage lang=lang page=page/> });
    (status, Html(html)).into_response()
}
