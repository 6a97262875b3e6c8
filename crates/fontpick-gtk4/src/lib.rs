//! Fontpick GTK4 - GTK4 front end for the fontpick-core font chooser
//!
//! Provides the modal dialog window, its controls, a pango-backed preview
//! and the host collaborators (font catalog, locale, default family).

mod backend;
mod controls;
mod dialog;
mod preview;

pub use backend::{platform_default_family, GlibLocale, PangoCatalog};
pub use controls::PREVIEW_CSS_CLASS;
pub use dialog::{ask_font, FontChooserDialog};
pub use preview::{apply_font, LabelPreview, PreviewStyle};

// Re-export fontpick-core types for convenience
pub use fontpick_core::*;
