//! Contact page.

use leptos::prelude::*;

use crate::i18n::{Text, tr};
use crate::services::locale::Language;

#[component]
pub fn ContactPage(lang: Language) -> impl IntoView {
    view! {
        <section class="card">
            <h1 class="card__title">{tr(lang, Text::ContactTitle)}</h1>
            <p>{tr(lang, Text::ContactBody)}</p>
        </section>
    }
}
