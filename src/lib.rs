//! Fontpick - a modal font chooser dialog for GTK4
//!
//! This crate bundles:
//! - the GTK-agnostic chooser model (`fontpick-core`)
//! - the GTK4 dialog and `ask_font` entry point (`fontpick-gtk4`)

pub use fontpick_gtk4::*;
