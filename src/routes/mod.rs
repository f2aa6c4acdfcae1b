//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the HTML pages, the form posts, the language switch
//! and static assets. The route guard runs as middleware in front of every
//! route, so handlers can assume the token-presence rules already hold.

pub mod auth;
pub mod extract;
pub mod language;
pub mod pages;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::CookieJar;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::services::guard::{GuardDecision, LOGIN_PATH, evaluate};
use crate::services::session::{self, Session, SessionToken};
use crate::state::AppState;

/// Upload ceiling for `POST /extract`.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route("/", get(pages::home))
        .route("/contact", get(pages::contact))
        .route("/extract", post(extract::submit))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/api/language", post(language::select))
        .route("/api/healthz", get(healthz))
        .route_service("/favicon.ico", ServeFile::new(public_dir.join("logo.svg")))
        .nest_service("/static", ServeDir::new(public_dir))
        .layer(middleware::from_fn(guard))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Route guard middleware: redirect before any handler runs.
async fn guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let token_present = SessionToken::read(&jar).is_some();
    match evaluate(token_present, request.uri().path()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = %request.uri().path(), to = target, "route guard redirect");
            Redirect::to(target).into_response()
        }
    }
}

/// Session for a page render.
///
/// A token the backend rejects is cleared and the browser is sent to
/// `/login`; that response comes back as `Err`.
pub(crate) async fn page_session(state: &AppState, jar: CookieJar) -> Result<(CookieJar, Session), Response> {
    let session = session::bootstrap(state.backend.as_ref(), SessionToken::read(&jar)).await;
    if session.rejected {
        let jar = SessionToken::clear(jar, state.config.cookie_secure);
        return Err((jar, Redirect::to(LOGIN_PATH)).into_response());
    }
    Ok((jar, session))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
