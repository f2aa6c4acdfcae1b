//! UI text catalog.
//!
//! Every user-visible string is a [`Text`] key with exactly one English and
//! one Portuguese rendering. There is no fallback table and no third variant.

use crate::backend::types::ResultSection;
use crate::services::locale::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    // Header
    Contact,
    Login,
    SignUp,
    Logout,
    LanguageLabel,
    Apply,

    // Extraction page
    HomeTitle,
    SelectImage,
    ImageTitle,
    ImageTitlePlaceholder,
    TranslatePrompt,
    TargetLanguagePrompt,
    ImprovePrompt,
    SummarizePrompt,
    No,
    Yes,
    ExtractButton,
    Extracting,
    MissingFile,
    MissingTitle,
    ExtractFailed,
    OriginalExtraction,
    ImprovedExtraction,
    TranslatedText,
    SummarizedText,
    SubmissionInProgress,
    LogoutFailed,

    // Account forms
    Email,
    Password,
    Username,
    ConfirmPassword,
    LoggingIn,
    SigningUp,
    FillAllFields,
    PasswordMismatch,
    InvalidCredentials,
    SignupFailed,
    GenericError,
    AlreadyHaveAccount,
    NoAccount,

    // Contact
    ContactTitle,
    ContactBody,

    // Post-login interstitial
    Redirecting,
    Continue,
}

impl Text {
    #[cfg(test)]
    pub const ALL: [Text; 44] = [
        Text::Contact,
        Text::Login,
        Text::SignUp,
        Text::Logout,
        Text::LanguageLabel,
        Text::Apply,
        Text::HomeTitle,
        Text::SelectImage,
        Text::ImageTitle,
        Text::ImageTitlePlaceholder,
        Text::TranslatePrompt,
        Text::TargetLanguagePrompt,
        Text::ImprovePrompt,
        Text::SummarizePrompt,
        Text::No,
        Text::Yes,
        Text::ExtractButton,
        Text::Extracting,
        Text::MissingFile,
        Text::MissingTitle,
        Text::ExtractFailed,
        Text::OriginalExtraction,
        Text::ImprovedExtraction,
        Text::TranslatedText,
        Text::SummarizedText,
        Text::SubmissionInProgress,
        Text::LogoutFailed,
        Text::Email,
        Text::Password,
        Text::Username,
        Text::ConfirmPassword,
        Text::LoggingIn,
        Text::SigningUp,
        Text::FillAllFields,
        Text::PasswordMismatch,
        Text::InvalidCredentials,
        Text::SignupFailed,
        Text::GenericError,
        Text::AlreadyHaveAccount,
        Text::NoAccount,
        Text::ContactTitle,
        Text::ContactBody,
        Text::Redirecting,
        Text::Continue,
    ];

    /// `(english, portuguese)` renderings.
    #[must_use]
    pub fn variants(self) -> (&'static str, &'static str) {
        match self {
            Self::Contact => ("Contact", "Contato"),
            Self::Login => ("Login", "Entrar"),
            Self::SignUp => ("Sign Up", "Cadastre-se"),
            Self::Logout => ("Logout", "Sair"),
            Self::LanguageLabel => ("Language", "Idioma"),
            Self::Apply => ("Apply", "Aplicar"),
            Self::HomeTitle => ("Transform Your Image into Text", "Transforme Sua Imagem em Texto"),
            Self::SelectImage => ("Select an image file", "Selecione um arquivo de imagem"),
            Self::ImageTitle => ("Image Title", "Título da Imagem"),
            Self::ImageTitlePlaceholder => ("Enter a title for the image", "Digite um título para a imagem"),
            Self::TranslatePrompt => ("Do you want to translate with AI?", "Você quer traduzir usando IA?"),
            Self::TargetLanguagePrompt => ("Select target language", "Selecione o idioma de destino"),
            Self::ImprovePrompt => (
                "Do you want to improve the text extraction with AI?",
                "Você quer melhorar a extração do texto com IA?",
            ),
            Self::SummarizePrompt => ("Do you want to summarize the text with AI?", "Você quer resumir o texto usando IA?"),
            Self::No => ("No", "Não"),
            Self::Yes => ("Yes", "Sim"),
            Self::ExtractButton => ("Extract text", "Extrair texto"),
            Self::Extracting => ("Extracting...", "Extraindo..."),
            Self::MissingFile => ("Please select an image file.", "Por favor, selecione um arquivo de imagem."),
            Self::MissingTitle => (
                "Please provide a title for the image.",
                "Por favor, forneça um título para a imagem.",
            ),
            Self::ExtractFailed => (
                "Failed to extract text. Please try again later.",
                "Falha ao extrair o texto. Por favor, tente novamente mais tarde.",
            ),
            Self::OriginalExtraction => ("Original Extraction", "Extração Original"),
            Self::ImprovedExtraction => ("Improved Extraction", "Extração Melhorada"),
            Self::TranslatedText => ("Translated Text", "Texto Traduzido"),
            Self::SummarizedText => ("Summarized Text", "Texto Resumido"),
            Self::SubmissionInProgress => (
                "This form is already being submitted. Please wait.",
                "Este formulário já está sendo enviado. Por favor, aguarde.",
            ),
            Self::LogoutFailed => ("Logout failed. Please try again.", "Falha ao sair. Por favor, tente novamente."),
            Self::Email => ("Email", "E-mail"),
            Self::Password => ("Password", "Senha"),
            Self::Username => ("Username", "Nome de Usuário"),
            Self::ConfirmPassword => ("Confirm Password", "Confirme a Senha"),
            Self::LoggingIn => ("Logging in...", "Entrando..."),
            Self::SigningUp => ("Signing up...", "Cadastrando..."),
            Self::FillAllFields => ("Please fill in all fields.", "Por favor, preencha todos os campos."),
            Self::PasswordMismatch => ("Passwords do not match.", "As senhas não coincidem."),
            Self::InvalidCredentials => ("Invalid email or password.", "E-mail ou senha inválidos."),
            Self::SignupFailed => (
                "An error occurred during signup. Please try again.",
                "Ocorreu um erro durante o cadastro. Por favor, tente novamente.",
            ),
            Self::GenericError => (
                "An error occurred. Please try again later.",
                "Ocorreu um erro. Por favor, tente novamente mais tarde.",
            ),
            Self::AlreadyHaveAccount => ("Already have an account? ", "Já tem uma conta? "),
            Self::NoAccount => ("Don't have an account? ", "Não tem uma conta? "),
            Self::ContactTitle => ("Contact Us", "Contato"),
            Self::ContactBody => ("This is the contact page.", "Esta é a página de contato."),
            Self::Redirecting => ("Redirecting...", "Redirecionando..."),
            Self::Continue => ("Continue", "Continuar"),
        }
    }
}

/// Render `text` in `lang`.
#[must_use]
pub fn tr(lang: Language, text: Text) -> &'static str {
    let (en, pt) = text.variants();
    match lang {
        Language::En => en,
        Language::Pt => pt,
    }
}

/// Heading key for an extraction result section.
#[must_use]
pub fn section_heading(section: ResultSection) -> Text {
    match section {
        ResultSection::Original => Text::OriginalExtraction,
        ResultSection::Improved => Text::ImprovedExtraction,
        ResultSection::Translated => Text::TranslatedText,
        ResultSection::Summarized => Text::SummarizedText,
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
