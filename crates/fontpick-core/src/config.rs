// src/config.rs
use crate::constants::{DEFAULT_SAMPLE_TEXT, DEFAULT_TITLE};
use crate::font::FontDescription;
use crate::locale::Language;

#[derive(Clone, Debug)]
pub struct ChooserConfig {
    pub sample_text: String,
    pub title: String,
    /// Font the controls start from; `None` means the platform default
    pub initial_font: Option<FontDescription>,
    /// Forces the label language instead of detecting it from the locale
    pub language: Option<Language>,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            initial_font: None,
            language: None,
        }
    }
}

impl ChooserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_text(mut self, text: &str) -> Self {
        self.sample_text = text.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_initial_font(mut self, font: FontDescription) -> Self {
        self.initial_font = Some(font);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Initial font, falling back to `default_family` at the default size
    pub fn initial_font_or(&self, default_family: &str) -> FontDescription {
        self.initial_font
            .clone()
            .unwrap_or_else(|| FontDescription::new(default_family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FONT_SIZE;

    #[test]
    fn test_defaults() {
        let config = ChooserConfig::new();
        assert_eq!(config.sample_text, "Abcd");
        assert_eq!(config.title, "Font Chooser");
        assert!(config.initial_font.is_none());
        assert!(config.language.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ChooserConfig::new()
            .with_sample_text("Chosen font: ")
            .with_title("Choose a font")
            .with_language(Language::It);

        assert_eq!(config.sample_text, "Chosen font: ");
        assert_eq!(config.title, "Choose a font");
        assert_eq!(config.language, Some(Language::It));
    }

    #[test]
    fn test_initial_font_fallback() {
        let config = ChooserConfig::new();
        let font = config.initial_font_or("Cantarell");
        assert_eq!(font.family, "Cantarell");
        assert_eq!(font.size, DEFAULT_FONT_SIZE);

        let config = config.with_initial_font(FontDescription::new("Arial").with_size(14));
        let font = config.initial_font_or("Cantarell");
        assert_eq!(font.family, "Arial");
        assert_eq!(font.size, 14);
    }
}
