use super::*;

#[test]
fn english_selects_first_variant() {
    for text in Text::ALL {
        assert_eq!(tr(Language::En, text), text.variants().0, "{text:?}");
    }
}

#[test]
fn portuguese_selects_second_variant() {
    for text in Text::ALL {
        assert_eq!(tr(Language::Pt, text), text.variants().1, "{text:?}");
    }
}

#[test]
fn every_key_has_two_distinct_non_empty_renderings() {
    for text in Text::ALL {
        let (en, pt) = text.variants();
        assert!(!en.trim().is_empty(), "{text:?} has empty English text");
        assert!(!pt.trim().is_empty(), "{text:?} has empty Portuguese text");
        assert_ne!(en, pt, "{text:?} is not translated");
    }
}

#[test]
fn unknown_selection_renders_portuguese() {
    let lang = Language::from_selection("es");
    assert_eq!(tr(lang, Text::Login), "Entrar");
}

#[test]
fn section_headings_match_result_fields() {
    assert_eq!(tr(Language::En, section_heading(ResultSection::Original)), "Original Extraction");
    assert_eq!(tr(Language::Pt, section_heading(ResultSection::Improved)), "Extração Melhorada");
    assert_eq!(tr(Language::En, section_heading(ResultSection::Translated)), "Translated Text");
    assert_eq!(tr(Language::Pt, section_heading(ResultSection::Summarized)), "Texto Resumido");
}
