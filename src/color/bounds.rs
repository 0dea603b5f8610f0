//! Approximate coupling between lightness bounds and contrast bounds.
//!
//! Editors keep the two bound pairs in step with a straight-line fit
//! through the defaults: lightness 95 sits at contrast 1.05 and lightness
//! 5 at contrast 19.5. The fit is a convenience for editing only; the
//! contrast curve inverts the real WCAG function by search.

use anyhow::Result;

use super::curve::{
    DEFAULT_MAX_CONTRAST, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_CONTRAST, DEFAULT_MIN_LIGHTNESS,
};

/// Valid contrast ratios.
pub const CONTRAST_DOMAIN: (f64, f64) = (1.0, 21.0);
/// Valid lightness percentages.
pub const LIGHTNESS_DOMAIN: (f64, f64) = (0.0, 100.0);

const LIGHTNESS_SPAN: f64 = DEFAULT_MAX_LIGHTNESS - DEFAULT_MIN_LIGHTNESS;
const CONTRAST_SPAN: f64 = DEFAULT_MAX_CONTRAST - DEFAULT_MIN_CONTRAST;

/// Lightness the linear fit assigns to a contrast ratio.
#[must_use]
pub fn lightness_for_contrast(contrast: f64) -> f64 {
    let lightness =
        DEFAULT_MAX_LIGHTNESS - (contrast - DEFAULT_MIN_CONTRAST) * LIGHTNESS_SPAN / CONTRAST_SPAN;
    lightness.clamp(LIGHTNESS_DOMAIN.0, LIGHTNESS_DOMAIN.1)
}

/// Contrast ratio the linear fit assigns to a lightness.
#[must_use]
pub fn contrast_for_lightness(lightness: f64) -> f64 {
    let contrast =
        DEFAULT_MIN_CONTRAST + (DEFAULT_MAX_LIGHTNESS - lightness) * CONTRAST_SPAN / LIGHTNESS_SPAN;
    contrast.clamp(CONTRAST_DOMAIN.0, CONTRAST_DOMAIN.1)
}

/// Lightness bounds `(min, max)` matching contrast bounds `(min, max)`.
///
/// The lowest contrast is the lightest shade, so the pairs cross over.
#[must_use]
pub fn lightness_bounds_for(min_contrast: f64, max_contrast: f64) -> (f64, f64) {
    (lightness_for_contrast(max_contrast), lightness_for_contrast(min_contrast))
}

/// Contrast bounds `(min, max)` matching lightness bounds `(min, max)`.
#[must_use]
pub fn contrast_bounds_for(min_lightness: f64, max_lightness: f64) -> (f64, f64) {
    (contrast_for_lightness(max_lightness), contrast_for_lightness(min_lightness))
}

/// Checks an optional `(min, max)` pair against its domain and ordering.
///
/// # Errors
///
/// Returns an error if either value lies outside `domain` or `min > max`.
pub fn check_pair(
    label: &str,
    min: Option<f64>,
    max: Option<f64>,
    domain: (f64, f64),
) -> Result<()> {
    for value in [min, max].into_iter().flatten() {
        if !(domain.0..=domain.1).contains(&value) {
            anyhow::bail!("{label} {value} is out of range ({}-{})", domain.0, domain.1);
        }
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            anyhow::bail!("Minimum {label} {min} is greater than maximum {max}");
        }
    }

    Ok(())
}
