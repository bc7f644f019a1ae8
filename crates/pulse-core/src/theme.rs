//! Per-vertical colour palettes.

use crate::enums::Vertical;

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` notation.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Wrap `text` in a 24-bit ANSI foreground escape.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\u{1b}[38;2;{};{};{}m{text}\u{1b}[0m", self.0, self.1, self.2)
    }
}

/// Visual theme bound to a vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub vertical: Vertical,
    pub primary: Rgb,
    pub primary_light: Rgb,
    pub secondary: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub background: Rgb,
}

const DENTAL: Theme = Theme {
    vertical: Vertical::Dental,
    primary: Rgb(0x19, 0x76, 0xD2),
    primary_light: Rgb(0x42, 0xA5, 0xF5),
    secondary: Rgb(0x4C, 0xAF, 0x50),
    text_primary: Rgb(0x0A, 0x19, 0x29),
    text_secondary: Rgb(0x54, 0x6E, 0x7A),
    background: Rgb(0xFF, 0xFF, 0xFF),
};

// Wine and gold.
const AESTHETIC: Theme = Theme {
    vertical: Vertical::Aesthetic,
    primary: Rgb(0x80, 0x00, 0x20),
    primary_light: Rgb(0x9C, 0x27, 0x42),
    secondary: Rgb(0xFF, 0xD7, 0x00),
    text_primary: Rgb(0x21, 0x21, 0x21),
    text_secondary: Rgb(0x42, 0x42, 0x42),
    background: Rgb(0xFF, 0xF8, 0xE1),
};

impl Theme {
    #[must_use]
    pub const fn for_vertical(vertical: Vertical) -> Self {
        match vertical {
            Vertical::Dental => DENTAL,
            Vertical::Aesthetic => AESTHETIC,
        }
    }

    /// Dashboard heading, e.g. `Dental Industry Intelligence`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} Industry Intelligence", self.vertical.title())
    }
}
