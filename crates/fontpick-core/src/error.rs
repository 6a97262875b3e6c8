// src/error.rs
use thiserror::Error;

/// Failure modes of the font chooser.
///
/// A cancelled dialog is not an error: it resolves to `DialogResult::Cancelled`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChooserError {
    #[error("Font family not available: {family}")]
    UnknownFamily { family: String },

    #[error("Dialog result requested before the dialog was closed")]
    ResultNotReady,

    #[error("Dialog is already closed")]
    AlreadyClosed,

    #[error("Font catalog unavailable: {message}")]
    CatalogUnavailable { message: String },

    #[error("Completion channel closed before a result was sent")]
    ChannelClosed,
}

pub type ChooserResult<T> = Result<T, ChooserError>;
