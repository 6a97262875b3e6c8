//! Font description edited by the chooser, and the family list it offers
//!
//! `FontDescription` is a plain value: the chooser owns one and mutates it
//! through explicit setters, backends only ever read it.

pub mod discovery;

use std::fmt;

pub use discovery::AvailableFamilies;

use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

/// Font weight variants offered by the chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant variants offered by the chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSlant {
    #[default]
    Roman,
    Italic,
}

impl From<bool> for FontWeight {
    fn from(bold: bool) -> Self {
        if bold { FontWeight::Bold } else { FontWeight::Normal }
    }
}

impl From<bool> for FontSlant {
    fn from(italic: bool) -> Self {
        if italic { FontSlant::Italic } else { FontSlant::Roman }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
        }
    }
}

impl fmt::Display for FontSlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSlant::Roman => f.write_str("roman"),
            FontSlant::Italic => f.write_str("italic"),
        }
    }
}

/// Everything the chooser lets the user pick
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescription {
    pub family: String,
    /// Point size
    pub size: u32,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY)
    }
}

impl FontDescription {
    /// Plain upright font of `family` at the default size
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            size: DEFAULT_FONT_SIZE,
            weight: FontWeight::Normal,
            slant: FontSlant::Roman,
            underline: false,
            strikethrough: false,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_slant(mut self, slant: FontSlant) -> Self {
        self.slant = slant;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.slant == FontSlant::Italic
    }
}

/// Summary such as `Arial 10 bold roman underline`
impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.family, self.size, self.weight, self.slant)?;
        if self.underline {
            f.write_str(" underline")?;
        }
        if self.strikethrough {
            f.write_str(" overstrike")?;
        }
        Ok(())
    }
}
