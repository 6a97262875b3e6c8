//! Static label table and locale-based language selection
//!
//! The language is resolved once, when a dialog is built, and the resulting
//! [`Labels`] value is handed to the widgets. Nothing here is process-wide.

use crate::traits::LocaleProvider;

/// Languages the label table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    It,
    Ru,
}

impl Language {
    /// Look up a two-letter code; anything else is `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "it" => Some(Language::It),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }

    /// Language for a locale string such as `fr_FR.UTF-8`
    ///
    /// Only the first two characters count. Shorter strings and unknown
    /// codes give English.
    pub fn from_locale(locale: &str) -> Self {
        let code: String = locale.chars().take(2).collect();
        if code.chars().count() < 2 {
            return Language::En;
        }
        Self::from_code(&code).unwrap_or_default()
    }

    /// Language for whatever the provider reports, English on failure
    pub fn detect(provider: &dyn LocaleProvider) -> Self {
        match provider.locale() {
            Some(locale) => {
                let language = Self::from_locale(&locale);
                tracing::debug!("Locale {:?} resolved to {:?}", locale, language);
                language
            }
            None => {
                tracing::debug!("No locale available, using English labels");
                Language::En
            }
        }
    }
}

/// Translated control labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub ok: &'static str,
    pub cancel: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub underline: &'static str,
    pub strikethrough: &'static str,
}

const EN: Labels = Labels {
    ok: "Ok",
    cancel: "Cancel",
    bold: "Bold",
    italic: "Italic",
    underline: "Underline",
    strikethrough: "Strikethrough",
};

const FR: Labels = Labels {
    ok: "Ok",
    cancel: "Annuler",
    bold: "Gras",
    italic: "Italique",
    underline: "Souligné",
    strikethrough: "Barré",
};

const IT: Labels = Labels {
    ok: "Ok",
    cancel: "Annulla",
    bold: "Grassetto",
    italic: "Corsivo",
    underline: "Sottolineato",
    strikethrough: "Barrato",
};

const RU: Labels = Labels {
    ok: "Ok",
    cancel: "Отмена",
    bold: "Полужирный",
    italic: "Курсив",
    underline: "Подчеркнутый",
    strikethrough: "Зачеркнутый",
};

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => EN,
            Language::Fr => FR,
            Language::It => IT,
            Language::Ru => RU,
        }
    }

    /// Labels for a forced language, or for the detected one
    pub fn resolve(forced: Option<Language>, provider: &dyn LocaleProvider) -> Self {
        let language = forced.unwrap_or_else(|| Language::detect(provider));
        Self::for_language(language)
    }
}

impl Default for Labels {
    fn default() -> Self {
        EN
    }
}

/// Locale from the POSIX environment (`LC_ALL`, `LC_MESSAGES`, `LANG`)
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocale;

impl EnvLocale {
    const VARIABLES: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

    /// First non-empty variable in POSIX priority order, as seen by `lookup`
    fn first_set(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        Self::VARIABLES
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.is_empty())
    }
}

impl LocaleProvider for EnvLocale {
    fn locale(&self) -> Option<String> {
        Self::first_set(|var| std::env::var(var).ok())
    }
}
