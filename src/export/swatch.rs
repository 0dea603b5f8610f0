//! Per-shade display metadata: weight, contrast label, readable text color.

use anyhow::Result;
use serde::Serialize;

use super::weight::tailwind_weight;
use crate::color::space::hex_to_rgb;
use crate::models::{ColorSet, RgbColor};

/// Dark text color for light swatches.
pub const DARK_TEXT: &str = "#000000";
/// Light text color for dark swatches.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Display metadata of one shade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    /// Position in the palette, lightest first
    pub index: usize,
    /// Tailwind weight label
    pub weight: u32,
    /// Stored hex value
    pub hex: String,
    /// Upper-case hex without `#`
    pub hex_label: String,
    /// Contrast ratio against white
    pub contrast: f64,
    /// Contrast ratio as `N.NN:1`, trailing zeros trimmed
    pub contrast_label: String,
    /// Text color that reads best on this shade
    pub text_color: &'static str,
    /// Whether this shade is the set's base color
    pub is_base: bool,
}

impl Swatch {
    /// Builds the swatch for shade `index` of `total`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` cannot be decoded.
    pub fn new(hex: &str, index: usize, total: usize, base_color: &str) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        let contrast = rgb.contrast_with(&RgbColor::WHITE);

        Ok(Self {
            index,
            weight: tailwind_weight(index, total),
            hex: hex.to_string(),
            hex_label: hex.trim_start_matches('#').to_uppercase(),
            contrast,
            contrast_label: format_contrast(contrast),
            text_color: text_color_for(rgb),
            is_base: hex.eq_ignore_ascii_case(base_color),
        })
    }
}

/// Swatches of every shade in `set`.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn swatches(set: &ColorSet) -> Result<Vec<Swatch>> {
    let total = set.colors.len();
    set.colors
        .iter()
        .enumerate()
        .map(|(index, hex)| Swatch::new(hex, index, total, &set.base_color))
        .collect()
}

/// Formats a contrast ratio like `4.5:1` or `21:1`.
#[must_use]
pub fn format_contrast(ratio: f64) -> String {
    let fixed = format!("{ratio:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}:1")
}

/// Black or white, whichever contrasts more with `background`.
///
/// Ties go to black.
#[must_use]
pub fn text_color_for(background: RgbColor) -> &'static str {
    let on_black = background.contrast_with(&RgbColor::BLACK);
    let on_white = background.contrast_with(&RgbColor::WHITE);
    if on_black >= on_white {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
