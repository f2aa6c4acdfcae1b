//! Auth routes: login, signup, logout.
//!
//! Validation runs before the in-flight check and before any backend call. A
//! successful login or signup stores the token cookie and answers with the
//! redirect interstitial, which moves on to `/` after a short delay.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;

use super::pages::home_response;
use crate::forms::in_flight::{Admission, new_form_id};
use crate::forms::login::{LoginForm, login_outcome};
use crate::forms::signup::{SignupForm, signup_outcome};
use crate::forms::{AuthOutcome, FormMessage};
use crate::i18n::{Text, tr};
use crate::pages::extraction::ExtractionView;
use crate::pages::login::{LoginPage, LoginView};
use crate::pages::redirect::RedirectPage;
use crate::pages::signup::{SignupPage, SignupView};
use crate::pages::{Chrome, render_page};
use crate::services::guard::{HOME_PATH, LOGIN_PATH, SIGNUP_PATH};
use crate::services::locale::Language;
use crate::services::session::SessionToken;
use crate::state::AppState;

// =============================================================================
// LOGIN
// =============================================================================

/// `GET /login`
pub async fn login_page(lang: Language) -> Html<String> {
    Html(render_login(lang, LoginView { form_id: new_form_id(), ..LoginView::default() }))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    lang: Language,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(text) => {
            return login_failure(StatusCode::UNPROCESSABLE_ENTITY, lang, &form, &FormMessage::Text(text));
        }
    };

    let _in_flight = match state.in_flight.admit(&form.form_id) {
        Admission::Tracked(guard) => Some(guard),
        Admission::Untracked => None,
        Admission::Busy => {
            let page = LoginView {
                form_id: form.form_id.clone(),
                email: form.email.clone(),
                message: Some(tr(lang, Text::SubmissionInProgress).to_string()),
                busy: true,
            };
            return (StatusCode::CONFLICT, Html(render_login(lang, page))).into_response();
        }
    };

    let result = state.backend.login(&credentials).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "login request failed");
    }

    match login_outcome(result) {
        AuthOutcome::Authenticated(token) => {
            tracing::info!("login succeeded");
            signed_in(&state, lang, jar, &token)
        }
        AuthOutcome::Rejected(message) => {
            tracing::info!("login rejected");
            login_failure(rejection_status(&message), lang, &form, &message)
        }
    }
}

fn render_login(lang: Language, page: LoginView) -> String {
    render_page(Chrome::new(lang, false, LOGIN_PATH), move || view! { <LoginPage lang=lang page=page/> })
}

fn login_failure(status: StatusCode, lang: Language, form: &LoginForm, message: &FormMessage) -> Response {
    let page = LoginView {
        form_id: new_form_id(),
        email: form.email.clone(),
        message: Some(message.render(lang)),
        busy: false,
    };
    (status, Html(render_login(lang, page))).into_response()
}

// =============================================================================
// SIGNUP
// =============================================================================

/// `GET /signup`
pub async fn signup_page(lang: Language) -> Html<String> {
    Html(render_signup(lang, SignupView { form_id: new_form_id(), ..SignupView::default() }))
}

/// `POST /signup`
pub async fn signup(
    State(state): State<AppState>,
    lang: Language,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Response {
    let request = match form.validate() {
        Ok(request) => request,
        Err(text) => {
            return signup_failure(StatusCode::UNPROCESSABLE_ENTITY, lang, &form, &FormMessage::Text(text));
        }
    };

    let _in_flight = match state.in_flight.admit(&form.form_id) {
        Admission::Tracked(guard) => Some(guard),
        Admission::Untracked => None,
        Admission::Busy => {
            let page = SignupView {
                form_id: form.form_id.clone(),
                username: form.username.clone(),
                email: form.email.clone(),
                message: Some(tr(lang, Text::SubmissionInProgress).to_string()),
                busy: true,
            };
            return (StatusCode::CONFLICT, Html(render_signup(lang, page))).into_response();
        }
    };

    let result = state.backend.signup(&request).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "signup request failed");
    }

    match signup_outcome(result) {
        AuthOutcome::Authenticated(token) => {
            tracing::info!("signup succeeded");
            signed_in(&state, lang, jar, &token)
        }
        AuthOutcome::Rejected(message) => {
            tracing::info!("signup rejected");
            signup_failure(rejection_status(&message), lang, &form, &message)
        }
    }
}

fn render_signup(lang: Language, page: SignupView) -> String {
    render_page(Chrome::new(lang, false, SIGNUP_PATH), move || view! { <SignupPage lang=lang page=page/> })
}

fn signup_failure(status: StatusCode, lang: Language, form: &SignupForm, message: &FormMessage) -> Response {
    let page = SignupView {
        form_id: new_form_id(),
        username: form.username.clone(),
        email: form.email.clone(),
        message: Some(message.render(lang)),
        busy: false,
    };
    (status, Html(render_signup(lang, page))).into_response()
}

// =============================================================================
// LOGOUT
// =============================================================================

/// `POST /logout`: end the backend session, then drop the cookie.
///
/// When the backend call fails the cookie is kept and the home page is shown
/// with an alert.
pub async fn logout(State(state): State<AppState>, lang: Language, jar: CookieJar) -> Response {
    let Some(token) = SessionToken::read(&jar) else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match state.backend.logout(token.as_str()).await {
        Ok(()) => {
            tracing::info!("logout succeeded");
            let jar = SessionToken::clear(jar, state.config.cookie_secure);
            (jar, Redirect::to(LOGIN_PATH)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "logout request failed");
            let page = ExtractionView {
                form_id: new_form_id(),
                message: Some(tr(lang, Text::LogoutFailed).to_string()),
                ..ExtractionView::default()
            };
            home_response(StatusCode::BAD_GATEWAY, lang, true, page)
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Store the session cookie and show the interstitial that moves on to `/`.
fn signed_in(state: &AppState, lang: Language, jar: CookieJar, token: &SessionToken) -> Response {
    let jar = token.store(jar, state.config.cookie_secure);
    let delay_ms = state.config.redirect_delay_ms;
    let chrome = Chrome { refresh_to: Some(HOME_PATH), ..Chrome::new(lang, true, HOME_PATH) };
    let html = render_page(chrome, move || {
        view! { <RedirectPage lang=lang target=HOME_PATH delay_ms=delay_ms/> }
    });
    (jar, Html(html)).into_response()
}

/// Credential failures are 401; every other rejection is a bad gateway.
fn rejection_status(message: &FormMessage) -> StatusCode {
    match message {
        FormMessage::Text(Text::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
