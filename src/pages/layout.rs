//! Document shell and site header.

use leptos::prelude::*;

use super::Chrome;
use crate::i18n::{Text, tr};
use crate::services::guard::{HOME_PATH, LOGIN_PATH, SIGNUP_PATH};
use crate::services::locale::Language;

pub const BRAND: &str = "LangAImage";

#[component]
pub fn Shell(chrome: Chrome, children: Children) -> impl IntoView {
    let refresh = chrome.refresh_to.map(|target| {
        view! {
            <noscript>
                <meta http-equiv="refresh" content={format!("0; url={target}")}/>
            </noscript>
        }
    });

    view! {
        <!DOCTYPE html>
        <html lang={chrome.lang.code()}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{BRAND}</title>
                <link rel="icon" href="/favicon.ico"/>
                <link rel="stylesheet" href="/static/styles.css"/>
                <script src="/static/app.js" defer=true></script>
                {refresh}
            </head>
            <body>
                <Header chrome=chrome/>
                <main class="page">{children()}</main>
            </body>
        </html>
    }
}

#[component]
pub fn Header(chrome: Chrome) -> impl IntoView {
    let lang = chrome.lang;

    // Logged-in users get a logout button; everyone else gets the auth links.
    let account = if chrome.authenticated {
        view! {
            <form class="nav-form" method="post" action="/logout">
                <button class="nav-link nav-link--button" type="submit">
                    {tr(lang, Text::Logout)}
                </button>
            </form>
        }
        .into_any()
    } else {
        view! {
            <a class="nav-link" href=LOGIN_PATH>{tr(lang, Text::Login)}</a>
            <a class="nav-link" href=SIGNUP_PATH>{tr(lang, Text::SignUp)}</a>
        }
        .into_any()
    };

    view! {
        <header class="site-header">
            <a class="brand" href=HOME_PATH>
                <img class="brand__logo" src="/static/logo.svg" alt="" width="32" height="32"/>
                <span class="brand__name">{BRAND}</span>
            </a>
            <nav class="site-nav">
                <a class="nav-link" href="/contact">{tr(lang, Text::Contact)}</a>
                {account}
            </nav>
            <LanguageSwitch lang=lang return_to={chrome.return_to}/>
        </header>
    }
}

/// EN/PT dropdown. Submits on change via `app.js`; the button covers
/// browsers without scripts.
#[component]
pub fn LanguageSwitch(lang: Language, return_to: &'static str) -> impl IntoView {
    view! {
        <form class="language-form" method="post" action="/api/language">
            <label class="visually-hidden" for="language-select">{tr(lang, Text::LanguageLabel)}</label>
            <select id="language-select" name="language" data-autosubmit="true">
                <option value="en" selected={lang == Language::En}>"EN"</option>
                <option value="pt" selected={lang == Language::Pt}>"PT"</option>
            </select>
            <input type="hidden" name="return_to" value=return_to/>
            <noscript>
                <button type="submit">{tr(lang, Text::Apply)}</button>
            </noscript>
        </form>
    }
}
