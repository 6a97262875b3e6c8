use crate::error::ChooserResult;
use crate::font::FontDescription;

/// Host font catalog query
pub trait FontCatalog {
    /// Installed family names, in any order, possibly with duplicates
    fn families(&self) -> ChooserResult<Vec<String>>;
}

/// Host locale query
pub trait LocaleProvider {
    /// Locale string such as `fr_FR.UTF-8`, or `None` when undetectable
    fn locale(&self) -> Option<String>;
}

/// Preview surface for the sample text
pub trait PreviewRenderer {
    /// Show `text` styled with every field of `font`
    fn render(&mut self, text: &str, font: &FontDescription);
}
