//! Modal font chooser window

use crate::backend::{platform_default_family, GlibLocale, PangoCatalog};
use crate::controls::{send, Controls};
use crate::preview::LabelPreview;
use fontpick_core::{
    AvailableFamilies, ChooserConfig, ChooserEvent, ChooserResult, ChooserStatus, FontChooser,
    FontDescription, Labels, ResultReceiver,
};
use gtk4::prelude::*;

/// Font chooser window plus the signal that fires when it closes
pub struct FontChooserDialog {
    window: gtk4::Window,
    result: ResultReceiver,
}

impl FontChooserDialog {
    /// Build the dialog; it is shown by [`present`](Self::present) or [`run`](Self::run)
    pub fn new<W: IsA<gtk4::Window>>(parent: Option<&W>, config: ChooserConfig) -> ChooserResult<Self> {
        let window = gtk4::Window::builder()
            .title(config.title.as_str())
            .modal(true)
            .resizable(false)
            .destroy_with_parent(true)
            .build();
        if let Some(parent) = parent {
            window.set_transient_for(Some(parent));
        }

        let labels = Labels::resolve(config.language, &GlibLocale);
        let families = AvailableFamilies::discover(&PangoCatalog::for_widget(&window))?;
        let font = config.initial_font_or(&platform_default_family());
        tracing::info!(
            "Opening font chooser on {} with {} families",
            font,
            families.len()
        );

        let (events_tx, events_rx) = async_channel::unbounded::<ChooserEvent>();
        let controls = Controls::build(&font, &families, &labels, events_tx.clone());
        window.set_child(Some(controls.widget()));

        let (mut chooser, result) = FontChooser::new(
            font,
            families,
            &config.sample_text,
            LabelPreview::new(controls.preview()),
        );

        // Window-manager close goes through the chooser as a cancel
        let close_tx = events_tx.clone();
        window.connect_close_request(move |_| {
            if close_tx.send_blocking(ChooserEvent::Cancel).is_ok() {
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });

        // Destroyed along with its parent
        window.connect_destroy(move |_| send(&events_tx, ChooserEvent::Cancel));

        let window_weak = window.downgrade();
        glib::MainContext::default().spawn_local(async move {
            while let Ok(event) = events_rx.recv().await {
                match chooser.apply(event) {
                    Ok(ChooserStatus::Open) => {}
                    Ok(ChooserStatus::Closed) => break,
                    Err(err) => tracing::debug!("Ignored chooser event: {}", err),
                }
            }
            drop(chooser);

            if let Some(window) = window_weak.upgrade() {
                window.destroy();
            }
        });

        Ok(FontChooserDialog { window, result })
    }

    pub fn window(&self) -> &gtk4::Window {
        &self.window
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Result once the dialog has closed, `ResultNotReady` before that
    pub fn try_result(&mut self) -> ChooserResult<Option<FontDescription>> {
        self.result.try_result()
    }

    /// Show the dialog and wait until it is confirmed or cancelled
    pub async fn run(mut self) -> ChooserResult<Option<FontDescription>> {
        self.present();
        self.result.wait().await
    }
}

/// The window lives as long as its handle; dropping an open dialog cancels it
impl Drop for FontChooserDialog {
    fn drop(&mut self) {
        if self.result.is_pending() {
            tracing::debug!("Font chooser dropped while open, destroying its window");
            self.window.destroy();
        }
    }
}

/// Open a modal font chooser over `parent` and wait for the user
///
/// Returns the confirmed font, or `None` when the dialog was cancelled or
/// could not be built.
pub async fn ask_font<W: IsA<gtk4::Window>>(
    parent: Option<&W>,
    config: ChooserConfig,
) -> Option<FontDescription> {
    let dialog = match FontChooserDialog::new(parent, config) {
        Ok(dialog) => dialog,
        Err(err) => {
            tracing::warn!("Font chooser could not be opened: {}", err);
            return None;
        }
    };

    match dialog.run().await {
        Ok(font) => font,
        Err(err) => {
            tracing::warn!("Font chooser finished without a result: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dropping_unshown_dialog_destroys_window() {
        if gtk4::init().is_err() {
            eprintln!("No display available, skipping");
            return;
        }
        let context = glib::MainContext::default();
        let _guard = context.acquire().expect("main context is free in tests");
        let toplevels = gtk4::Window::toplevels().n_items();

        let dialog = FontChooserDialog::new(None::<&gtk4::Window>, ChooserConfig::new())
            .expect("pango catalog is available once gtk is up");
        let destroyed = Rc::new(Cell::new(false));
        let flag = destroyed.clone();
        dialog.window().connect_destroy(move |_| flag.set(true));
        assert_eq!(gtk4::Window::toplevels().n_items(), toplevels + 1);

        drop(dialog);
        while context.iteration(false) {}

        assert!(destroyed.get());
        assert_eq!(gtk4::Window::toplevels().n_items(), toplevels);
    }
}
