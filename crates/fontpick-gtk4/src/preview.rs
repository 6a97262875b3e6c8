//! Preview label rendering through pango attributes

use fontpick_core::{FontDescription, FontSlant, FontWeight, PreviewRenderer};
use gtk4::prelude::*;
use gtk4::Label;

/// Pango form of a chooser font
#[derive(Debug, Clone)]
pub struct PreviewStyle {
    pub description: pango::FontDescription,
    pub underline: pango::Underline,
    pub strikethrough: bool,
}

impl PreviewStyle {
    pub fn new(font: &FontDescription) -> Self {
        let mut description = pango::FontDescription::new();
        description.set_family(&font.family);
        description.set_size(pango_units(font.size));
        description.set_weight(match font.weight {
            FontWeight::Normal => pango::Weight::Normal,
            FontWeight::Bold => pango::Weight::Bold,
        });
        description.set_style(match font.slant {
            FontSlant::Roman => pango::Style::Normal,
            FontSlant::Italic => pango::Style::Italic,
        });

        PreviewStyle {
            description,
            underline: if font.underline {
                pango::Underline::Single
            } else {
                pango::Underline::None
            },
            strikethrough: font.strikethrough,
        }
    }

    /// Attributes covering the whole text
    pub fn attributes(&self) -> pango::AttrList {
        let attrs = pango::AttrList::new();
        attrs.insert(pango::AttrFontDesc::new(&self.description));
        attrs.insert(pango::AttrInt::new_underline(self.underline));
        attrs.insert(pango::AttrInt::new_strikethrough(self.strikethrough));
        attrs
    }
}

/// Largest point size pango can represent in its fixed-point units
pub const MAX_POINT_SIZE: i32 = i32::MAX / pango::SCALE;

/// Points to pango units; sizes above `MAX_POINT_SIZE` are clamped to it
fn pango_units(points: u32) -> i32 {
    i32::try_from(points)
        .unwrap_or(i32::MAX)
        .min(MAX_POINT_SIZE)
        * pango::SCALE
}

/// Renders the sample text into a GTK label
pub struct LabelPreview {
    label: Label,
}

impl LabelPreview {
    pub fn new(label: &Label) -> Self {
        LabelPreview { label: label.clone() }
    }
}

impl PreviewRenderer for LabelPreview {
    fn render(&mut self, text: &str, font: &FontDescription) {
        let style = PreviewStyle::new(font);
        self.label.set_text(text);
        self.label.set_attributes(Some(&style.attributes()));
    }
}

/// Show `font` on an arbitrary label, keeping its text
pub fn apply_font(label: &Label, font: &FontDescription) {
    label.set_attributes(Some(&PreviewStyle::new(font).attributes()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style() {
        let style = PreviewStyle::new(&FontDescription::new("Arial"));

        assert_eq!(style.description.family().as_deref(), Some("Arial"));
        assert_eq!(style.description.size(), 10 * pango::SCALE);
        assert_eq!(style.description.weight(), pango::Weight::Normal);
        assert_eq!(style.description.style(), pango::Style::Normal);
        assert_eq!(style.underline, pango::Underline::None);
        assert!(!style.strikethrough);
    }

    #[test]
    fn test_all_fields_reflected() {
        let font = FontDescription::new("DejaVu Serif")
            .with_size(24)
            .with_weight(FontWeight::Bold)
            .with_slant(FontSlant::Italic)
            .with_underline(true)
            .with_strikethrough(true);
        let style = PreviewStyle::new(&font);

        assert_eq!(style.description.family().as_deref(), Some("DejaVu Serif"));
        assert_eq!(style.description.size(), 24 * pango::SCALE);
        assert_eq!(style.description.weight(), pango::Weight::Bold);
        assert_eq!(style.description.style(), pango::Style::Italic);
        assert_eq!(style.underline, pango::Underline::Single);
        assert!(style.strikethrough);
    }

    #[test]
    fn test_pango_units_clamp_to_max_point_size() {
        let max = u32::try_from(MAX_POINT_SIZE).unwrap();

        assert_eq!(pango_units(0), 0);
        assert_eq!(pango_units(12), 12 * pango::SCALE);
        assert_eq!(pango_units(max), MAX_POINT_SIZE * pango::SCALE);
        assert_eq!(pango_units(max + 1), MAX_POINT_SIZE * pango::SCALE);
        assert_eq!(pango_units(u32::MAX), MAX_POINT_SIZE * pango::SCALE);
    }

    #[test]
    fn test_max_point_size_is_largest_exact_size() {
        assert!(MAX_POINT_SIZE.checked_mul(pango::SCALE).is_some());
        assert!((MAX_POINT_SIZE + 1).checked_mul(pango::SCALE).is_none());
    }

    #[test]
    fn test_preview_size_matches_largest_stepper_value() {
        let max = u32::try_from(MAX_POINT_SIZE).unwrap();
        let style = PreviewStyle::new(&FontDescription::new("Arial").with_size(max));
        assert_eq!(style.description.size() / pango::SCALE, MAX_POINT_SIZE);
    }
}
