//! Signup page.

use leptos::prelude::*;

use crate::i18n::{Text, tr};
use crate::services::guard::LOGIN_PATH;
use crate::services::locale::Language;

#[derive(Debug, Clone, Default)]
pub struct SignupView {
    pub form_id: String,
    pub username: String,
    pub email: String,
    pub message: Option<String>,
    pub busy: bool,
}

#[component]
pub fn SignupPage(lang: Language, page: SignupView) -> impl IntoView {
    let SignupView { form_id, username, email, message, busy } = page;
    let submit_label = if busy { Text::SigningUp } else { Text::SignUp };

    view! {
        <section class="card card--narrow">
            <h1 class="card__title">{tr(lang, Text::SignUp)}</h1>
            {message.map(|m| view! { <p class="alert" role="alert">{m}</p> })}
            <form class="stacked-form" method="post" action="/signup" data-submit-lock="true">
                <input type="hidden" name="form_id" value=form_id/>
                <label for="username">{tr(lang, Text::Username)}</label>
                <input id="username" type="text" name="username" autocomplete="username" value=username/>
                <label for="email">{tr(lang, Text::Email)}</label>
                <input id="email" type="email" name="email" autocomplete="email" value=email/>
                <label for="password">{tr(lang, Text::Password)}</label>
                <input id="password" type="password" name="password" autocomplete="new-password"/>
                <label for="confirmPassword">{tr(lang, Text::ConfirmPassword)}</label>
                <input id="confirmPassword" type="password" name="confirmPassword" autocomplete="new-password"/>
                <button class="button" type="submit" disabled=busy data-loading-label={tr(lang, Text::SigningUp)}>
                    {tr(lang, submit_label)}
                </button>
            </form>
            <p class="card__footer">
                {tr(lang, Text::AlreadyHaveAccount)}
                <a href=LOGIN_PATH>{tr(lang, Text::Login)}</a>
            </p>
        </section>
    }
}
