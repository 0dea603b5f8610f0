//! Formatting a single color value for export.

use anyhow::Result;

use crate::color::space::{hex_to_hsl, hex_to_rgb};
use crate::models::ColorFormat;

/// Writes `hex` in the requested notation.
///
/// Hex values pass through untouched; HSL components are rounded to
/// integers.
///
/// # Errors
///
/// Returns an error if `hex` cannot be decoded (hex output never fails).
pub fn format_color(hex: &str, format: ColorFormat) -> Result<String> {
    let formatted = match format {
        ColorFormat::Hex => hex.to_string(),
        ColorFormat::Rgb => {
            let rgb = hex_to_rgb(hex)?;
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        }
        ColorFormat::Rgba => {
            let rgb = hex_to_rgb(hex)?;
            format!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b)
        }
        ColorFormat::Hsl => {
            let hsl = hex_to_hsl(hex)?;
            format!("hsl({:.0}, {:.0}%, {:.0}%)", hsl.h.round(), hsl.s.round(), hsl.l.round())
        }
        ColorFormat::Hsla => {
            let hsl = hex_to_hsl(hex)?;
            format!("hsla({:.0}, {:.0}%, {:.0}%, 1)", hsl.h.round(), hsl.s.round(), hsl.l.round())
        }
    };

    Ok(formatted)
}
