//! Login page.

use leptos::prelude::*;

use crate::i18n::{Text, tr};
use crate::services::guard::SIGNUP_PATH;
use crate::services::locale::Language;

/// Values echoed into the login form. The password is never echoed.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub form_id: String,
    pub email: String,
    pub message: Option<String>,
    pub busy: bool,
}

#[component]
pub fn LoginPage(lang: Language, page: LoginView) -> impl IntoView {
    let LoginView { form_id, email, message, busy } = page;
    let submit_label = if busy { Text::LoggingIn } else { Text::Login };

    view! {
        <section class="card card--narrow">
            <h1 class="card__title">{tr(lang, Text::Login)}</h1>
            {message.map(|m| view! { <p class="alert" role="alert">{m}</p> })}
            <form class="stacked-form" method="post" action="/login" data-submit-lock="true">
                <input type="hidden" name="form_id" value=form_id/>
                <label for="email">{tr(lang, Text::Email)}</label>
                <input id="email" type="email" name="email" autocomplete="email" value=email/>
                <label for="password">{tr(lang, Text::Password)}</label>
                <input id="password" type="password" name="password" autocomplete="current-password"/>
                <button class="button" type="submit" disabled=busy data-loading-label={tr(lang, Text::LoggingIn)}>
                    {tr(lang, submit_label)}
                </button>
            </form>
            <p class="card__footer">
                {tr(lang, Text::NoAccount)}
                <a href=SIGNUP_PATH>{tr(lang, Text::SignUp)}</a>
            </p>
        </section>
    }
}
