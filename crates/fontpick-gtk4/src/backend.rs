//! Host collaborators backed by pango, glib and GTK settings

use fontpick_core::constants::DEFAULT_FONT_FAMILY;
use fontpick_core::{ChooserResult, FontCatalog, LocaleProvider};
use gtk4::prelude::*;
use pango::prelude::*;

/// Family catalog of a widget's pango context
pub struct PangoCatalog {
    context: pango::Context,
}

impl PangoCatalog {
    pub fn new(context: pango::Context) -> Self {
        PangoCatalog { context }
    }

    /// Catalog for the font map `widget` renders with
    pub fn for_widget(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self::new(widget.pango_context())
    }
}

impl FontCatalog for PangoCatalog {
    fn families(&self) -> ChooserResult<Vec<String>> {
        Ok(self
            .context
            .list_families()
            .iter()
            .map(|family| family.name().to_string())
            .collect())
    }
}

/// Locale from the glib language list, most preferred first
#[derive(Debug, Clone, Copy, Default)]
pub struct GlibLocale;

impl LocaleProvider for GlibLocale {
    fn locale(&self) -> Option<String> {
        glib::language_names()
            .into_iter()
            .next()
            .map(|name| name.to_string())
            .filter(|name| !name.is_empty())
    }
}

/// Family of the desktop's `gtk-font-name`, or `Sans`
pub fn platform_default_family() -> String {
    gtk4::Settings::default()
        .and_then(|settings| settings.gtk_font_name())
        .and_then(|name| pango::FontDescription::from_string(&name).family())
        .map(|family| family.to_string())
        .filter(|family| !family.is_empty())
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
}
