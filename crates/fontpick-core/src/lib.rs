//! Fontpick Core - GTK-agnostic font chooser model
//!
//! This crate holds everything about the font chooser that does not need a
//! widget toolkit: the font description being edited, the family list, the
//! translated labels, and the open/closed state machine with its completion
//! signal.

pub mod chooser;
pub mod config;
pub mod constants;
pub mod dummy_backend;
pub mod error;
pub mod font;
pub mod locale;
pub mod traits;

// Re-export main types
pub use chooser::{ChooserEvent, ChooserStatus, DialogResult, FontChooser, ResultReceiver};
pub use config::ChooserConfig;
pub use error::{ChooserError, ChooserResult};
pub use font::{AvailableFamilies, FontDescription, FontSlant, FontWeight};
pub use locale::{EnvLocale, Labels, Language};

// Re-export traits
pub use traits::*;
