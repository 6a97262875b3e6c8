// src/chooser.rs
//! Font chooser state, independent of any widget toolkit
//!
//! A [`FontChooser`] owns the font being edited. Backends turn control
//! changes into [`ChooserEvent`]s and feed them to [`FontChooser::apply`] from
//! a single task, so the font is never mutated from two places. Closing the
//! chooser sends the [`DialogResult`] to the paired [`ResultReceiver`].

use async_channel::{Receiver, Sender, TryRecvError};

use crate::config::ChooserConfig;
use crate::error::{ChooserError, ChooserResult};
use crate::font::{AvailableFamilies, FontDescription, FontSlant, FontWeight};
use crate::traits::{FontCatalog, PreviewRenderer};

/// A control change or a close request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserEvent {
    Family(String),
    Size(u32),
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Strikethrough(bool),
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserStatus {
    Open,
    Closed,
}

/// How the dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed(FontDescription),
    Cancelled,
}

impl DialogResult {
    /// The confirmed font, `None` when cancelled
    pub fn into_font(self) -> Option<FontDescription> {
        match self {
            DialogResult::Confirmed(font) => Some(font),
            DialogResult::Cancelled => None,
        }
    }
}

/// Editable font plus the preview it drives
pub struct FontChooser<R: PreviewRenderer> {
    font: FontDescription,
    families: AvailableFamilies,
    sample_text: String,
    preview: R,
    outcome: Option<DialogResult>,
    completion: Sender<DialogResult>,
}

impl<R: PreviewRenderer> FontChooser<R> {
    /// Create an open chooser and render the initial preview
    pub fn new(
        font: FontDescription,
        families: AvailableFamilies,
        sample_text: &str,
        preview: R,
    ) -> (Self, ResultReceiver) {
        let (completion, rx) = async_channel::bounded(1);

        let mut chooser = FontChooser {
            font,
            families,
            sample_text: sample_text.to_string(),
            preview,
            outcome: None,
            completion,
        };

        if !chooser.family_is_listed() {
            tracing::debug!(
                "Initial family {:?} is not among the {} available families",
                chooser.font.family,
                chooser.families.len()
            );
        }
        chooser.render_preview();

        (chooser, ResultReceiver::new(rx))
    }

    /// Create a chooser from a dialog configuration, querying `catalog` once
    pub fn from_config(
        config: &ChooserConfig,
        default_family: &str,
        catalog: &dyn FontCatalog,
        preview: R,
    ) -> ChooserResult<(Self, ResultReceiver)> {
        let families = AvailableFamilies::discover(catalog)?;
        let font = config.initial_font_or(default_family);
        Ok(Self::new(font, families, &config.sample_text, preview))
    }

    pub fn font(&self) -> &FontDescription {
        &self.font
    }

    pub fn families(&self) -> &AvailableFamilies {
        &self.families
    }

    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }

    pub fn preview(&self) -> &R {
        &self.preview
    }

    pub fn status(&self) -> ChooserStatus {
        if self.outcome.is_some() {
            ChooserStatus::Closed
        } else {
            ChooserStatus::Open
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == ChooserStatus::Open
    }

    /// Whether the current family is one the selector offers
    pub fn family_is_listed(&self) -> bool {
        self.families.contains(&self.font.family)
    }

    /// Select a family from the available list
    pub fn set_family(&mut self, family: &str) -> ChooserResult<()> {
        self.ensure_open()?;
        if !self.families.contains(family) {
            return Err(ChooserError::UnknownFamily { family: family.to_string() });
        }
        self.update(|font| font.family = family.to_string())
    }

    pub fn set_size(&mut self, size: u32) -> ChooserResult<()> {
        self.update(|font| font.size = size)
    }

    pub fn set_weight(&mut self, bold: bool) -> ChooserResult<()> {
        self.update(|font| font.weight = FontWeight::from(bold))
    }

    pub fn set_slant(&mut self, italic: bool) -> ChooserResult<()> {
        self.update(|font| font.slant = FontSlant::from(italic))
    }

    pub fn set_underline(&mut self, underline: bool) -> ChooserResult<()> {
        self.update(|font| font.underline = underline)
    }

    pub fn set_strikethrough(&mut self, strikethrough: bool) -> ChooserResult<()> {
        self.update(|font| font.strikethrough = strikethrough)
    }

    /// Close with the current font as the result
    pub fn confirm(&mut self) -> ChooserResult<()> {
        let font = self.font.clone();
        self.close(DialogResult::Confirmed(font))
    }

    /// Close without a font
    pub fn cancel(&mut self) -> ChooserResult<()> {
        self.close(DialogResult::Cancelled)
    }

    /// Final font once closed; fails while the chooser is still open
    pub fn result(&self) -> ChooserResult<Option<FontDescription>> {
        self.outcome
            .clone()
            .map(DialogResult::into_font)
            .ok_or(ChooserError::ResultNotReady)
    }

    /// Dispatch an event to the matching operation
    pub fn apply(&mut self, event: ChooserEvent) -> ChooserResult<ChooserStatus> {
        tracing::debug!("Chooser event: {:?}", event);
        match event {
            ChooserEvent::Family(family) => self.set_family(&family)?,
            ChooserEvent::Size(size) => self.set_size(size)?,
            ChooserEvent::Bold(bold) => self.set_weight(bold)?,
            ChooserEvent::Italic(italic) => self.set_slant(italic)?,
            ChooserEvent::Underline(underline) => self.set_underline(underline)?,
            ChooserEvent::Strikethrough(strikethrough) => self.set_strikethrough(strikethrough)?,
            ChooserEvent::Confirm => self.confirm()?,
            ChooserEvent::Cancel => self.cancel()?,
        }
        Ok(self.status())
    }

    fn ensure_open(&self) -> ChooserResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(ChooserError::AlreadyClosed)
        }
    }

    fn update(&mut self, change: impl FnOnce(&mut FontDescription)) -> ChooserResult<()> {
        self.ensure_open()?;
        change(&mut self.font);
        self.render_preview();
        Ok(())
    }

    fn render_preview(&mut self) {
        self.preview.render(&self.sample_text, &self.font);
    }

    fn close(&mut self, result: DialogResult) -> ChooserResult<()> {
        self.ensure_open()?;
        tracing::info!(
            "Font chooser closed: {}",
            match &result {
                DialogResult::Confirmed(font) => font.to_string(),
                DialogResult::Cancelled => "cancelled".to_string(),
            }
        );

        self.outcome = Some(result.clone());
        if self.completion.try_send(result).is_err() {
            tracing::debug!("Nobody is waiting for the chooser result");
        }
        self.completion.close();
        Ok(())
    }
}

impl<R: PreviewRenderer> Drop for FontChooser<R> {
    fn drop(&mut self) {
        // Torn down without OK or Cancel, e.g. destroyed with its parent
        if self.is_open() {
            let _ = self.cancel();
        }
    }
}

/// Completion signal for one chooser
pub struct ResultReceiver {
    rx: Receiver<DialogResult>,
    received: Option<DialogResult>,
}

impl ResultReceiver {
    fn new(rx: Receiver<DialogResult>) -> Self {
        ResultReceiver { rx, received: None }
    }

    /// Result if the chooser has closed, `ResultNotReady` otherwise
    pub fn try_result(&mut self) -> ChooserResult<Option<FontDescription>> {
        if self.received.is_none() {
            match self.rx.try_recv() {
                Ok(result) => self.received = Some(result),
                Err(TryRecvError::Empty) => return Err(ChooserError::ResultNotReady),
                Err(TryRecvError::Closed) => return Err(ChooserError::ChannelClosed),
            }
        }
        Ok(self.received.clone().and_then(DialogResult::into_font))
    }

    /// Wait for the chooser to close
    pub async fn wait(&mut self) -> ChooserResult<Option<FontDescription>> {
        if self.received.is_none() {
            let result = self.rx.recv().await.map_err(|_| ChooserError::ChannelClosed)?;
            self.received = Some(result);
        }
        Ok(self.received.clone().and_then(DialogResult::into_font))
    }

    /// Blocking variant of [`wait`](Self::wait); never call it on the UI thread
    pub fn wait_blocking(&mut self) -> ChooserResult<Option<FontDescription>> {
        if self.received.is_none() {
            let result = self.rx.recv_blocking().map_err(|_| ChooserError::ChannelClosed)?;
            self.received = Some(result);
        }
        Ok(self.received.clone().and_then(DialogResult::into_font))
    }

    /// Whether the chooser is still open as far as this receiver knows
    pub fn is_pending(&mut self) -> bool {
        matches!(self.try_result(), Err(ChooserError::ResultNotReady))
    }
}
