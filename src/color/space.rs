//! Hex, RGB and HSL conversions plus WCAG luminance and contrast math.
//!
//! Every other part of the crate goes through these helpers instead of
//! re-deriving color math locally. Functions taking hex strings validate
//! their input; the numeric helpers are infallible.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::{Hsl, RgbColor};

/// Pattern accepted at the validation gate: `#RRGGBB` or `#RGB`.
pub const HEX_COLOR_PATTERN: &str = r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$";

/// Returns true if `value` is a `#RRGGBB` or `#RGB` hex color.
#[must_use]
pub fn is_valid_hex(value: &str) -> bool {
    Regex::new(HEX_COLOR_PATTERN).is_ok_and(|re| re.is_match(value))
}

/// Validates a hex color and expands the short `#RGB` form to `#RRGGBB`.
///
/// Case is preserved so that a user's base color can be echoed back
/// verbatim.
///
/// # Errors
///
/// Returns an error if `value` does not match [`HEX_COLOR_PATTERN`].
pub fn normalize_hex(value: &str) -> Result<String> {
    let value = value.trim();
    if !is_valid_hex(value) {
        anyhow::bail!("Invalid hex color format: '{value}'. Expected #RRGGBB or #RGB");
    }

    if value.len() == 4 {
        let expanded: String = value[1..].chars().flat_map(|c| [c, c]).collect();
        return Ok(format!("#{expanded}"));
    }

    Ok(value.to_string())
}

/// Parses a hex color into its RGB channels.
///
/// # Errors
///
/// Returns an error for anything that is not a 6-digit hex color.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    RgbColor::from_hex(hex).with_context(|| format!("Cannot decode color '{hex}'"))
}

/// Decodes a hex color into HSL (`h` in `[0, 360)`, `s` and `l` in `[0, 100]`).
///
/// # Errors
///
/// Returns an error for anything that is not a 6-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(hex_to_rgb(hex)?.to_hsl())
}

/// Encodes an HSL triple as an upper-case `#RRGGBB` string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    RgbColor::from_hsl(h, s, l).to_hex()
}

/// WCAG relative luminance of raw channel values.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    RgbColor::new(r, g, b).relative_luminance()
}

/// WCAG contrast ratio between two hex colors.
///
/// # Errors
///
/// Returns an error if either color cannot be decoded.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    Ok(hex_to_rgb(a)?.contrast_with(&hex_to_rgb(b)?))
}

/// WCAG contrast ratio of a hex color against pure white.
///
/// # Errors
///
/// Returns an error if the color cannot be decoded.
pub fn contrast_against_white(hex: &str) -> Result<f64> {
    Ok(hex_to_rgb(hex)?.contrast_with(&RgbColor::WHITE))
}
