//! Home page: the extraction form and its results.

use leptos::prelude::*;

use crate::backend::types::ExtractionResult;
use crate::forms::extraction::{ExtractionForm, TARGET_LANGUAGES};
use crate::i18n::{Text, section_heading, tr};
use crate::services::locale::Language;

/// Everything the home page shows besides the shell.
#[derive(Debug, Clone, Default)]
pub struct ExtractionView {
    pub form: ExtractionForm,
    pub form_id: String,
    pub message: Option<String>,
    pub result: Option<ExtractionResult>,
    /// Render the form in its submitting state.
    pub busy: bool,
}

#[component]
pub fn ExtractionPage(lang: Language, page: ExtractionView) -> impl IntoView {
    let ExtractionView { form, form_id, message, result, busy } = page;
    let wants_translation = form.wants_translation();
    let target = form.target_language.clone();

    let languages = TARGET_LANGUAGES
        .iter()
        .map(|(code, name)| {
            let selected = *code == target;
            view! { <option value={*code} selected=selected>{*name}</option> }
        })
        .collect_view();

    let sections = result.map(|result| {
        let sections: Vec<(Text, String)> = result
            .sections()
            .into_iter()
            .map(|(section, text)| (section_heading(section), text.to_string()))
            .collect();
        view! {
            <section class="results">
                {sections
                    .into_iter()
                    .map(|(heading, text)| {
                        view! {
                            <article class="result">
                                <h2 class="result__heading">{tr(lang, heading)}</h2>
                                <div class="result__text">{text}</div>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        }
    });

    let submit_label = if busy { Text::Extracting } else { Text::ExtractButton };

    view! {
        <section class="card">
            <h1 class="card__title">{tr(lang, Text::HomeTitle)}</h1>
            {message.map(|m| view! { <p class="alert" role="alert">{m}</p> })}
            <form
                class="stacked-form"
                method="post"
                action="/extract"
                enctype="multipart/form-data"
                data-submit-lock="true"
            >
                <input type="hidden" name="form_id" value=form_id/>
                <label for="file">{tr(lang, Text::SelectImage)}</label>
                <input id="file" type="file" name="file" accept="image/*"/>
                <label for="title">{tr(lang, Text::ImageTitle)}</label>
                <input
                    id="title"
                    type="text"
                    name="title"
                    value={form.title}
                    placeholder={tr(lang, Text::ImageTitlePlaceholder)}
                />
                <YesNoSelect lang=lang name="translate" prompt=Text::TranslatePrompt value={form.translate}/>
                <div class="target-language" data-target-language="true" hidden={!wants_translation}>
                    <label for="targetLanguage">{tr(lang, Text::TargetLanguagePrompt)}</label>
                    <select id="targetLanguage" name="targetLanguage">{languages}</select>
                </div>
                <YesNoSelect
                    lang=lang
                    name="improveExtraction"
                    prompt=Text::ImprovePrompt
                    value={form.improve_extraction}
                />
                <YesNoSelect lang=lang name="summarizeText" prompt=Text::SummarizePrompt value={form.summarize_text}/>
                <button
                    class="button"
                    type="submit"
                    disabled=busy
                    data-loading-label={tr(lang, Text::Extracting)}
                >
                    {tr(lang, submit_label)}
                </button>
            </form>
            {sections}
        </section>
    }
}

/// A labelled no/yes selector that keeps the submitted choice.
#[component]
fn YesNoSelect(lang: Language, name: &'static str, prompt: Text, value: String) -> impl IntoView {
    let yes = value.trim().eq_ignore_ascii_case("yes");
    view! {
        <label for=name>{tr(lang, prompt)}</label>
        <select id=name name=name>
            <option value="no" selected={!yes}>{tr(lang, Text::No)}</option>
            <option value="yes" selected=yes>{tr(lang, Text::Yes)}</option>
        </select>
    }
}
