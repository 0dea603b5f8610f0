//! Human-readable names for base colors.

use std::fmt;

use anyhow::Result;

use super::space::hex_to_hsl;
use crate::models::Hsl;

/// Coarse color family a base color belongs to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl ColorFamily {
    /// Classifies a decoded color.
    ///
    /// Low saturation (< 15) splits into black/gray/white at lightness
    /// 20 and 80. Saturated colors darker than 15 or lighter than 85 are
    /// black or white; the rest are named by hue range.
    #[must_use]
    pub fn classify(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        if s < 15.0 {
            return if l < 20.0 {
                Self::Black
            } else if l > 80.0 {
                Self::White
            } else {
                Self::Gray
            };
        }

        if l < 15.0 {
            return Self::Black;
        }
        if l > 85.0 {
            return Self::White;
        }

        match h {
            h if h < 15.0 => Self::Red,
            h if h < 45.0 => Self::Orange,
            h if h < 75.0 => Self::Yellow,
            h if h < 165.0 => Self::Green,
            h if h < 195.0 => Self::Cyan,
            h if h < 255.0 => Self::Blue,
            h if h < 315.0 => Self::Purple,
            h if h < 345.0 => Self::Pink,
            _ => Self::Red,
        }
    }

    /// Lower-case name, e.g. `"blue"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Name with an upper-case first letter, e.g. `"Blue"`.
    #[must_use]
    pub fn display_name(self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cases the first character of `value`.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Palette name derived from a base color, e.g. `"Blue"` for `#3B82F6`.
///
/// # Errors
///
/// Returns an error if `hex` is not a valid hex color.
pub fn generated_name(hex: &str) -> Result<String> {
    Ok(ColorFamily::classify(hex_to_hsl(hex)?).display_name())
}
