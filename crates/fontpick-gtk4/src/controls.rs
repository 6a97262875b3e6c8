//! Dialog controls and their change-event wiring
//!
//! Controls never touch the font themselves. Each change becomes a
//! `ChooserEvent` on the dialog's event channel.

use crate::preview::MAX_POINT_SIZE;
use async_channel::Sender;
use fontpick_core::constants::{CONTROL_SPACING, DIALOG_MARGIN, FAMILY_LIST_HEIGHT, OPTION_SPACING};
use fontpick_core::{AvailableFamilies, ChooserEvent, FontDescription, Labels};
use gtk4::prelude::*;
use gtk4::{
    gdk, Adjustment, Align, Button, CheckButton, CssProvider, Frame, Grid, Label, ListBox,
    MenuButton, Orientation, PolicyType, Popover, ScrolledWindow, SelectionMode, SpinButton,
};
use std::cell::Cell;

pub const PREVIEW_CSS_CLASS: &str = "fontpick-preview";

thread_local! {
    static PREVIEW_STYLE_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Widgets of one dialog
pub struct Controls {
    root: Grid,
    preview: Label,
}

impl Controls {
    /// Build every control seeded from `font`
    pub fn build(
        font: &FontDescription,
        families: &AvailableFamilies,
        labels: &Labels,
        events: Sender<ChooserEvent>,
    ) -> Self {
        install_preview_style();

        let root = Grid::builder()
            .row_spacing(CONTROL_SPACING)
            .column_spacing(CONTROL_SPACING)
            .margin_top(DIALOG_MARGIN)
            .margin_bottom(DIALOG_MARGIN)
            .margin_start(DIALOG_MARGIN)
            .margin_end(DIALOG_MARGIN)
            .build();

        root.attach(&Self::family_selector(font, families, events.clone()), 0, 0, 1, 1);
        root.attach(&Self::size_stepper(font, events.clone()), 1, 0, 1, 1);
        root.attach(&Self::option_toggles(font, labels, events.clone()), 0, 1, 2, 1);

        let preview = Label::builder()
            .hexpand(true)
            .xalign(0.5)
            .build();
        preview.add_css_class(PREVIEW_CSS_CLASS);
        let preview_frame = Frame::new(None);
        preview_frame.set_child(Some(&preview));
        root.attach(&preview_frame, 0, 2, 2, 1);

        root.attach(&Self::buttons(labels, events), 0, 3, 2, 1);

        Controls { root, preview }
    }

    pub fn widget(&self) -> &Grid {
        &self.root
    }

    pub fn preview(&self) -> &Label {
        &self.preview
    }

    /// Closed choice over the available families
    ///
    /// The button label shows the current family even when it is not listed.
    fn family_selector(
        font: &FontDescription,
        families: &AvailableFamilies,
        events: Sender<ChooserEvent>,
    ) -> MenuButton {
        let button = MenuButton::builder()
            .label(font.family.as_str())
            .hexpand(true)
            .build();

        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::Browse);
        for family in families.iter() {
            list.append(&Label::builder().label(family).xalign(0.0).build());
        }

        let current = families
            .as_slice()
            .iter()
            .position(|family| family == &font.family)
            .and_then(|index| i32::try_from(index).ok())
            .and_then(|index| list.row_at_index(index));
        list.select_row(current.as_ref());

        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .min_content_height(FAMILY_LIST_HEIGHT)
            .child(&list)
            .build();
        let popover = Popover::builder().child(&scrolled).build();
        button.set_popover(Some(&popover));

        let names = families.as_slice().to_vec();
        let button_weak = button.downgrade();
        list.connect_row_activated(move |_, row| {
            let Some(family) = usize::try_from(row.index()).ok().and_then(|i| names.get(i)) else {
                return;
            };
            if let Some(button) = button_weak.upgrade() {
                button.set_label(family);
                button.popdown();
            }
            send(&events, ChooserEvent::Family(family.clone()));
        });

        button
    }

    /// Stepper from 0 up to the largest size the preview can show
    fn size_stepper(font: &FontDescription, events: Sender<ChooserEvent>) -> SpinButton {
        let (lower, upper) = size_range();
        let adjustment = Adjustment::new(f64::from(font.size), lower, upper, 1.0, 10.0, 0.0);
        let spin = SpinButton::new(Some(&adjustment), 1.0, 0);
        spin.set_numeric(true);

        spin.connect_value_changed(move |spin| {
            let size = u32::try_from(spin.value_as_int()).unwrap_or(0);
            send(&events, ChooserEvent::Size(size));
        });

        spin
    }

    fn option_toggles(font: &FontDescription, labels: &Labels, events: Sender<ChooserEvent>) -> Frame {
        let row = gtk4::Box::new(Orientation::Horizontal, OPTION_SPACING);
        row.set_homogeneous(true);
        row.set_margin_top(OPTION_SPACING);
        row.set_margin_bottom(OPTION_SPACING);
        row.set_margin_start(DIALOG_MARGIN);
        row.set_margin_end(DIALOG_MARGIN);

        let toggles: [(&str, bool, fn(bool) -> ChooserEvent); 4] = [
            (labels.bold, font.is_bold(), ChooserEvent::Bold),
            (labels.italic, font.is_italic(), ChooserEvent::Italic),
            (labels.underline, font.underline, ChooserEvent::Underline),
            (labels.strikethrough, font.strikethrough, ChooserEvent::Strikethrough),
        ];

        for (label, active, to_event) in toggles {
            let check = CheckButton::with_label(label);
            // Seed before connecting so the initial state is not reported
            check.set_active(active);
            let events = events.clone();
            check.connect_toggled(move |check| send(&events, to_event(check.is_active())));
            row.append(&check);
        }

        let frame = Frame::new(None);
        frame.set_child(Some(&row));
        frame
    }

    fn buttons(labels: &Labels, events: Sender<ChooserEvent>) -> gtk4::Box {
        let row = gtk4::Box::new(Orientation::Horizontal, OPTION_SPACING);
        row.set_halign(Align::Center);
        row.set_homogeneous(true);

        let ok = Button::with_label(labels.ok);
        let confirm_events = events.clone();
        ok.connect_clicked(move |_| send(&confirm_events, ChooserEvent::Confirm));

        let cancel = Button::with_label(labels.cancel);
        cancel.connect_clicked(move |_| send(&events, ChooserEvent::Cancel));

        row.append(&ok);
        row.append(&cancel);
        row
    }
}

/// Queue an event; after the dialog closed there is nobody left to hear it
pub(crate) fn send(events: &Sender<ChooserEvent>, event: ChooserEvent) {
    if let Err(err) = events.send_blocking(event) {
        tracing::debug!("Chooser already closed, dropping {:?}", err.into_inner());
    }
}

/// Bounds of the size stepper
fn size_range() -> (f64, f64) {
    (0.0, f64::from(MAX_POINT_SIZE))
}

fn install_preview_style() {
    if PREVIEW_STYLE_INSTALLED.with(Cell::get) {
        return;
    }
    let Some(display) = gdk::Display::default() else {
        tracing::warn!("No default display, preview keeps the theme background");
        return;
    };

    let css = CssProvider::new();
    css.load_from_data(&format!(
        "label.{PREVIEW_CSS_CLASS} {{ background-color: white; padding: 4px; }}"
    ));
    gtk4::style_context_add_provider_for_display(
        &display,
        &css,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    PREVIEW_STYLE_INSTALLED.with(|installed| installed.set(true));
}
