use super::*;
use crate::backend::types::ExtractionResult;
use crate::forms::extraction::ExtractionForm;
use crate::i18n::{Text, tr};
use contact::ContactPage;
use extraction::{ExtractionPage, ExtractionView};
use login::{LoginPage, LoginView};
use redirect::RedirectPage;
use signup::{SignupPage, SignupView};

fn contact(lang: Language, authenticated: bool) -> String {
    render_page(Chrome::new(lang, authenticated, "/contact"), move || view! { <ContactPage lang=lang/> })
}

fn home(lang: Language, page: ExtractionView) -> String {
    render_page(Chrome::new(lang, true, "/"), move || view! { <ExtractionPage lang=lang page=page/> })
}

// =============================================================================
// shell
// =============================================================================

#[test]
fn document_starts_with_doctype_and_lang() {
    let html = contact(Language::Pt, false);
    assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
    assert!(html.contains("lang=\"pt\""));
    assert!(html.contains("/static/styles.css"));
    assert!(html.contains("/static/app.js"));
}

#[test]
fn anonymous_header_links_to_login_and_signup() {
    let html = contact(Language::En, false);
    assert!(html.contains("href=\"/login\""));
    assert!(html.contains("href=\"/signup\""));
    assert!(!html.contains("action=\"/logout\""));
}

#[test]
fn authenticated_header_offers_logout() {
    let html = contact(Language::En, true);
    assert!(html.contains("action=\"/logout\""));
    assert!(!html.contains("href=\"/signup\""));
}

#[test]
fn language_switch_returns_to_current_path() {
    let html = contact(Language::En, false);
    assert!(html.contains("action=\"/api/language\""));
    assert!(html.contains("value=\"/contact\""));
}

#[test]
fn english_page_has_no_portuguese_text() {
    let html = contact(Language::En, false);
    assert!(html.contains(tr(Language::En, Text::ContactBody)));
    assert!(!html.contains(tr(Language::Pt, Text::ContactBody)));
    assert!(!html.contains(tr(Language::Pt, Text::SignUp)));
}

#[test]
fn portuguese_page_has_no_english_text() {
    let html = contact(Language::Pt, false);
    assert!(html.contains(tr(Language::Pt, Text::ContactBody)));
    assert!(!html.contains(tr(Language::En, Text::ContactBody)));
    assert!(!html.contains(tr(Language::En, Text::SignUp)));
}

// =============================================================================
// extraction page
// =============================================================================

#[test]
fn home_echoes_title_and_form_id() {
    let mut form = ExtractionForm::default();
    form.set_text("title", "Receipt".into());
    let page = ExtractionView { form, form_id: "abc-123".into(), ..ExtractionView::default() };
    let html = home(Language::En, page);
    assert!(html.contains("value=\"Receipt\""));
    assert!(html.contains("value=\"abc-123\""));
    assert!(html.contains("enctype=\"multipart/form-data\""));
}

#[test]
fn home_offers_every_target_language() {
    let html = home(Language::En, ExtractionView::default());
    for code in ["en", "pt", "es", "fr", "it", "de", "zh", "ja"] {
        assert!(html.contains(&format!("value=\"{code}\"")), "missing {code}");
    }
    assert!(html.contains("日本語"));
}

#[test]
fn results_render_non_empty_sections_in_order() {
    let result = ExtractionResult {
        original_extraction: "raw text".into(),
        improved_extraction: String::new(),
        translated_text: "texto traduzido".into(),
        summarized_text: "short".into(),
    };
    let page = ExtractionView { result: Some(result), ..ExtractionView::default() };
    let html = home(Language::En, page);

    let original = html.find(tr(Language::En, Text::OriginalExtraction)).unwrap();
    let translated = html.find(tr(Language::En, Text::TranslatedText)).unwrap();
    let summarized = html.find(tr(Language::En, Text::SummarizedText)).unwrap();
    assert!(original < translated && translated < summarized);
    assert!(!html.contains(tr(Language::En, Text::ImprovedExtraction)));
    assert!(html.contains("raw text"));
}

#[test]
fn message_text_is_escaped() {
    let page = ExtractionView { message: Some("<script>alert(1)</script>".into()), ..ExtractionView::default() };
    let html = home(Language::En, page);
    assert!(!html.contains("<script>alert(1)"));
    assert!(html.contains("role=\"alert\""));
}

#[test]
fn busy_form_shows_loading_label() {
    let page = ExtractionView { busy: true, ..ExtractionView::default() };
    let html = home(Language::Pt, page);
    assert!(html.contains(tr(Language::Pt, Text::Extracting)));
    assert!(!html.contains(tr(Language::Pt, Text::ExtractButton)));
}

// =============================================================================
// account pages
// =============================================================================

#[test]
fn login_page_echoes_email_but_not_password() {
    let page = LoginView { email: "ana@example.com".into(), ..LoginView::default() };
    let html = render_page(Chrome::new(Language::Pt, false, "/login"), move || {
        view! { <LoginPage lang=Language::Pt page=page/> }
    });
    assert!(html.contains("value=\"ana@example.com\""));
    assert!(html.contains("name=\"password\""));
    assert!(html.contains(tr(Language::Pt, Text::NoAccount).trim()));
}

#[test]
fn signup_page_links_to_login() {
    let page = SignupView { message: Some(tr(Language::Pt, Text::PasswordMismatch).into()), ..SignupView::default() };
    let html = render_page(Chrome::new(Language::Pt, false, "/signup"), move || {
        view! { <SignupPage lang=Language::Pt page=page/> }
    });
    assert!(html.contains("name=\"confirmPassword\""));
    assert!(html.contains(tr(Language::Pt, Text::PasswordMismatch)));
    assert!(html.contains(tr(Language::Pt, Text::AlreadyHaveAccount).trim()));
}

#[test]
fn redirect_page_carries_target_and_fallback() {
    let chrome = Chrome { refresh_to: Some("/"), ..Chrome::new(Language::En, true, "/") };
    let html = render_page(chrome, move || view! { <RedirectPage lang=Language::En target="/" delay_ms=300 /> });
    assert!(html.contains("data-redirect-to=\"/\""));
    assert!(html.contains("data-redirect-delay=\"300\""));
    assert!(html.contains("url=/"));
    assert!(html.contains("<noscript>"));
}
