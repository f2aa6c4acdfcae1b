//! Post-login interstitial.
//!
//! `app.js` reads `data-redirect-to` / `data-redirect-delay` and navigates
//! after the delay. The shell adds a `<noscript>` meta refresh and the link
//! covers everything else.

use leptos::prelude::*;

use crate::i18n::{Text, tr};
use crate::services::locale::Language;

#[component]
pub fn RedirectPage(lang: Language, target: &'static str, delay_ms: u64) -> impl IntoView {
    view! {
        <section
            class="card card--narrow redirect"
            data-redirect-to=target
            data-redirect-delay={delay_ms.to_string()}
        >
            <p class="redirect__status">{tr(lang, Text::Redirecting)}</p>
            <a class="button" href=target>{tr(lang, Text::Continue)}</a>
        </section>
    }
}
