//! Dummy collaborators for driving the chooser without GTK

use crate::error::{ChooserError, ChooserResult};
use crate::font::FontDescription;
use crate::traits::{FontCatalog, LocaleProvider, PreviewRenderer};
use std::cell::RefCell;
use std::rc::Rc;

/// Catalog with a fixed family list, or a fixed failure
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    families: Result<Vec<String>, String>,
}

impl StaticCatalog {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticCatalog {
            families: Ok(families.into_iter().map(Into::into).collect()),
        }
    }

    /// Catalog whose query always fails with `message`
    pub fn failing(message: &str) -> Self {
        StaticCatalog { families: Err(message.to_string()) }
    }
}

impl FontCatalog for StaticCatalog {
    fn families(&self) -> ChooserResult<Vec<String>> {
        self.families
            .clone()
            .map_err(|message| ChooserError::CatalogUnavailable { message })
    }
}

/// Locale provider with a fixed answer
#[derive(Debug, Clone, Default)]
pub struct FixedLocale {
    locale: Option<String>,
}

impl FixedLocale {
    pub fn new(locale: &str) -> Self {
        FixedLocale { locale: Some(locale.to_string()) }
    }

    /// Provider that behaves like a failed locale query
    pub fn unavailable() -> Self {
        FixedLocale { locale: None }
    }
}

impl LocaleProvider for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }
}

/// Preview renderer that records every render
///
/// Clones share the same log, so a test can keep one handle while the
/// chooser owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingPreview {
    renders: Rc<RefCell<Vec<(String, FontDescription)>>>,
}

impl RecordingPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders so far
    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    /// Most recent text and font, if anything was rendered
    pub fn last(&self) -> Option<(String, FontDescription)> {
        self.renders.borrow().last().cloned()
    }

    /// Clear recorded renders
    pub fn clear(&self) {
        self.renders.borrow_mut().clear();
    }
}

impl PreviewRenderer for RecordingPreview {
    fn render(&mut self, text: &str, font: &FontDescription) {
        self.renders.borrow_mut().push((text.to_string(), font.clone()));
    }
}
