//! Server-rendered HTML pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a Leptos view rendered to a string on the server. There is
//! no hydration; the little client behavior the forms need (loading labels,
//! the target-language toggle, the post-login redirect) lives in
//! `/static/app.js` and is driven by `data-*` attributes.

pub mod contact;
pub mod extraction;
pub mod layout;
pub mod login;
pub mod redirect;
pub mod signup;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::services::locale::Language;
use layout::Shell;

/// Per-request values the page shell needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub lang: Language,
    pub authenticated: bool,
    /// Local path the language switch returns to.
    pub return_to: &'static str,
    /// Target of a `<noscript>` meta refresh, if the page navigates on its own.
    pub refresh_to: Option<&'static str>,
}

impl Chrome {
    #[must_use]
    pub fn new(lang: Language, authenticated: bool, return_to: &'static str) -> Self {
        Self { lang, authenticated, return_to, refresh_to: None }
    }
}

/// Render `body` inside the document shell.
pub fn render_page<F, V>(chrome: Chrome, body: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    Owner::new().with(move || {
        view! {
            <Shell chrome=chrome>{body()}</Shell>
        }
        .to_html()
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
