// src/constants.rs

// Dialog defaults
pub const DEFAULT_SAMPLE_TEXT: &str = "Abcd";
pub const DEFAULT_TITLE: &str = "Font Chooser";

// Font defaults
pub const DEFAULT_FONT_SIZE: u32 = 10;
pub const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Aliases every pango font map resolves, offered next to installed families
pub const LOGICAL_FAMILIES: [&str; 3] = ["Monospace", "Sans", "Serif"];

// Layout
pub const DIALOG_MARGIN: i32 = 10;
pub const CONTROL_SPACING: i32 = 10;
pub const OPTION_SPACING: i32 = 5;
pub const FAMILY_LIST_HEIGHT: i32 = 240;
