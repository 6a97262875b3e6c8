// tests/chooser_integration_tests.rs
//! Integration tests for complete chooser sessions, driven headlessly

use fontpick::dummy_backend::{FixedLocale, RecordingPreview, StaticCatalog};
use fontpick::{
    ChooserConfig, ChooserError, ChooserEvent, ChooserStatus, FontChooser, FontDescription,
    FontSlant, FontWeight, Labels, Language,
};

fn catalog() -> StaticCatalog {
    StaticCatalog::new(["Arial", "Courier New", "DejaVu Sans", "Arial"])
}

fn open_with(font: FontDescription) -> (FontChooser<RecordingPreview>, fontpick::ResultReceiver, RecordingPreview) {
    let preview = RecordingPreview::new();
    let config = ChooserConfig::new().with_initial_font(font);
    let (chooser, rx) = FontChooser::from_config(&config, "Sans", &catalog(), preview.clone())
        .expect("static catalog never fails");
    (chooser, rx, preview)
}

#[test]
fn test_bold_underline_confirm_scenario() {
    let (mut chooser, mut rx, _) = open_with(FontDescription::new("Arial"));

    chooser.apply(ChooserEvent::Bold(true)).unwrap();
    chooser.apply(ChooserEvent::Underline(true)).unwrap();
    assert_eq!(chooser.apply(ChooserEvent::Confirm), Ok(ChooserStatus::Closed));

    let expected = FontDescription {
        family: "Arial".to_string(),
        size: 10,
        weight: FontWeight::Bold,
        slant: FontSlant::Roman,
        underline: true,
        strikethrough: false,
    };
    assert_eq!(rx.wait_blocking(), Ok(Some(expected)));
}

#[test]
fn test_confirm_untouched_returns_initial_font() {
    let initial = FontDescription::new("Courier New")
        .with_size(0)
        .with_weight(FontWeight::Bold)
        .with_slant(FontSlant::Italic)
        .with_underline(true)
        .with_strikethrough(true);
    let (mut chooser, mut rx, _) = open_with(initial.clone());

    chooser.apply(ChooserEvent::Confirm).unwrap();
    assert_eq!(rx.wait_blocking(), Ok(Some(initial)));
}

#[test]
fn test_cancel_after_many_changes_returns_none() {
    let (mut chooser, mut rx, preview) = open_with(FontDescription::new("Arial"));

    let events = [
        ChooserEvent::Family("DejaVu Sans".to_string()),
        ChooserEvent::Size(48),
        ChooserEvent::Bold(true),
        ChooserEvent::Italic(true),
        ChooserEvent::Underline(true),
        ChooserEvent::Strikethrough(true),
    ];
    for event in events {
        assert_eq!(chooser.apply(event), Ok(ChooserStatus::Open));
    }
    assert_eq!(preview.render_count(), 7);

    chooser.apply(ChooserEvent::Cancel).unwrap();
    assert_eq!(rx.wait_blocking(), Ok(None));
}

#[test]
fn test_family_outside_catalog_is_ignored() {
    let (mut chooser, mut rx, _) = open_with(FontDescription::new("Arial"));

    assert_eq!(
        chooser.apply(ChooserEvent::Family("Wingdings".to_string())),
        Err(ChooserError::UnknownFamily { family: "Wingdings".to_string() })
    );
    // Logical aliases are always selectable
    chooser.apply(ChooserEvent::Family("Monospace".to_string())).unwrap();
    chooser.apply(ChooserEvent::Confirm).unwrap();

    assert_eq!(rx.wait_blocking().unwrap().unwrap().family, "Monospace");
}

#[test]
fn test_family_list_is_sorted_and_unique() {
    let (chooser, _rx, _) = open_with(FontDescription::new("Arial"));
    let families: Vec<&str> = chooser.families().iter().collect();
    assert_eq!(
        families,
        vec!["Arial", "Courier New", "DejaVu Sans", "Monospace", "Sans", "Serif"]
    );
}

#[test]
fn test_result_not_ready_while_open() {
    let (chooser, mut rx, _) = open_with(FontDescription::new("Arial"));
    assert_eq!(chooser.result(), Err(ChooserError::ResultNotReady));
    assert_eq!(rx.try_result(), Err(ChooserError::ResultNotReady));
}

#[test]
fn test_preview_tracks_every_field() {
    let (mut chooser, _rx, preview) = open_with(FontDescription::new("Arial"));

    chooser.set_family("Courier New").unwrap();
    chooser.set_size(18).unwrap();
    chooser.set_weight(true).unwrap();
    chooser.set_slant(true).unwrap();
    chooser.set_underline(true).unwrap();
    chooser.set_strikethrough(true).unwrap();

    let (text, font) = preview.last().unwrap();
    assert_eq!(text, "Abcd");
    assert_eq!(font.to_string(), "Courier New 18 bold italic underline overstrike");
}

#[test]
fn test_labels_follow_locale() {
    let cases = [
        ("fr_FR.UTF-8", "Annuler"),
        ("en_GB", "Cancel"),
        ("it_IT", "Annulla"),
        ("ru_RU.UTF-8", "Отмена"),
        ("pt_BR", "Cancel"),
        ("", "Cancel"),
        ("x", "Cancel"),
    ];
    for (locale, cancel) in cases {
        let labels = Labels::resolve(None, &FixedLocale::new(locale));
        assert_eq!(labels.cancel, cancel, "locale {:?}", locale);
    }

    let labels = Labels::resolve(None, &FixedLocale::unavailable());
    assert_eq!(labels, Labels::for_language(Language::En));
}
