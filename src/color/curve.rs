//! Lightness curves: the mapping from shade index to target lightness.
//!
//! Two strategies exist. The lightness curve spaces shades evenly between
//! the lightness bounds. The contrast curve spaces shades evenly in WCAG
//! contrast-against-white and searches for the lightness that reaches each
//! target. Both keep the base color's own lightness at its natural rank.

// Allow intentional casts between shade indices and floats
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::models::RgbColor;

/// Default lightest shade lightness.
pub const DEFAULT_MAX_LIGHTNESS: f64 = 95.0;
/// Default darkest shade lightness.
pub const DEFAULT_MIN_LIGHTNESS: f64 = 5.0;
/// Default contrast of the lightest shade against white.
pub const DEFAULT_MIN_CONTRAST: f64 = 1.05;
/// Default contrast of the darkest shade against white.
pub const DEFAULT_MAX_CONTRAST: f64 = 19.5;

/// Lightness range a palette spans, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessBounds {
    /// Darkest shade
    pub min: f64,
    /// Lightest shade
    pub max: f64,
}

impl LightnessBounds {
    /// Builds bounds from optional overrides, falling back to 5/95.
    #[must_use]
    pub fn from_options(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(DEFAULT_MIN_LIGHTNESS),
            max: max.unwrap_or(DEFAULT_MAX_LIGHTNESS),
        }
    }

    /// Relative position of `lightness` inside the range, clamped to `[0, 1]`.
    ///
    /// 0 is the light end, 1 the dark end.
    #[must_use]
    pub fn position_of(&self, lightness: f64) -> f64 {
        if lightness <= self.min {
            return 1.0;
        }
        if lightness >= self.max {
            return 0.0;
        }
        ((self.max - lightness) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Default for LightnessBounds {
    fn default() -> Self {
        Self::from_options(None, None)
    }
}

/// Contrast-against-white range a palette spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastBounds {
    /// Contrast of the lightest shade
    pub min: f64,
    /// Contrast of the darkest shade
    pub max: f64,
}

impl ContrastBounds {
    /// Builds bounds from optional overrides, falling back to 1.05/19.5.
    #[must_use]
    pub fn from_options(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(DEFAULT_MIN_CONTRAST),
            max: max.unwrap_or(DEFAULT_MAX_CONTRAST),
        }
    }

    /// Relative position of `contrast` inside the range, clamped to `[0, 1]`.
    #[must_use]
    pub fn position_of(&self, contrast: f64) -> f64 {
        if contrast <= self.min {
            return 0.0;
        }
        if contrast >= self.max {
            return 1.0;
        }
        ((contrast - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Default for ContrastBounds {
    fn default() -> Self {
        Self::from_options(None, None)
    }
}

/// Target lightness per shade, lightest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// One lightness value per shade
    pub values: Vec<f64>,
    /// Index holding the base color's own lightness
    pub base_index: usize,
}

impl Curve {
    fn single(base_lightness: f64) -> Self {
        Self {
            values: vec![base_lightness],
            base_index: 0,
        }
    }

    /// Number of shades on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the curve has no shades.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Index a relative position maps to in a palette of `count` shades.
#[must_use]
pub fn index_for_position(position: f64, count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let index = (position * (count - 1) as f64).round() as usize;
    index.min(count - 1)
}

/// Evenly spaced lightness curve that keeps the base lightness at its rank.
///
/// Index 0 is the lightest shade. The value at the base index is exactly
/// `base_lightness`; every other index is a linear interpolation from
/// `bounds.max` down to `bounds.min`.
#[must_use]
pub fn lightness_curve(count: usize, bounds: LightnessBounds, base_lightness: f64) -> Curve {
    if count <= 1 {
        return Curve::single(base_lightness);
    }

    let base_index = index_for_position(bounds.position_of(base_lightness), count);
    let range = bounds.max - bounds.min;

    let values = (0..count)
        .map(|i| {
            if i == base_index {
                base_lightness
            } else {
                let position = i as f64 / (count - 1) as f64;
                bounds.max - position * range
            }
        })
        .collect();

    Curve { values, base_index }
}

/// Contrast-targeted lightness curve.
///
/// Target contrasts are interpolated linearly between the bounds and each
/// is inverted to a lightness with [`find_lightness_for_contrast`]. The
/// base color keeps its own lightness at the rank its contrast implies.
#[must_use]
pub fn contrast_curve(
    hue: f64,
    saturation: f64,
    count: usize,
    bounds: ContrastBounds,
    base: RgbColor,
) -> Curve {
    let base_lightness = base.to_hsl().l;
    if count <= 1 {
        return Curve::single(base_lightness);
    }

    let base_contrast = base.contrast_with(&RgbColor::WHITE);
    let base_index = index_for_position(bounds.position_of(base_contrast), count);

    let values = (0..count)
        .map(|i| {
            if i == base_index {
                base_lightness
            } else {
                let position = i as f64 / (count - 1) as f64;
                let target = bounds.min + position * (bounds.max - bounds.min);
                find_lightness_for_contrast(hue, saturation, target)
            }
        })
        .collect();

    Curve { values, base_index }
}

/// Searches for the lightness whose color best matches `target` contrast
/// against white, for a fixed hue and saturation.
///
/// A coarse pass walks `[0, 100]` with a step that shrinks for low targets,
/// then a 0.1 step pass refines within two coarse steps of the best hit.
/// The result is clamped to `[1, 99]`.
#[must_use]
pub fn find_lightness_for_contrast(hue: f64, saturation: f64, target: f64) -> f64 {
    let contrast_at = |lightness: f64| {
        RgbColor::from_hsl(hue, saturation, lightness).contrast_with(&RgbColor::WHITE)
    };

    let step: f64 = if target < 2.0 {
        0.2
    } else if target < 5.0 {
        0.5
    } else {
        1.0
    };

    let mut best_lightness = 50.0;
    let mut best_diff = f64::INFINITY;

    let coarse_steps = (100.0 / step).round() as usize;
    for i in 0..=coarse_steps {
        let lightness = i as f64 * step;
        let diff = (contrast_at(lightness) - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best_lightness = lightness;
        }
        if diff < 0.01 {
            break;
        }
    }

    if best_diff > 0.05 {
        let start = (best_lightness - step * 2.0).max(0.0);
        let end = (best_lightness + step * 2.0).min(100.0);
        let fine_steps = ((end - start) / 0.1).round() as usize;

        for i in 0..=fine_steps {
            let lightness = start + i as f64 * 0.1;
            let diff = (contrast_at(lightness) - target).abs();
            if diff < best_diff {
                best_diff = diff;
                best_lightness = lightness;
            }
            if diff < 0.005 {
                break;
            }
        }
    }

    best_lightness.clamp(1.0, 99.0)
}

/// Saturation for one shade under a saturation curve.
///
/// `curve` is a percentage in `[-100, 100]`: a bell (`sin(t * PI)`) scaled by
/// it peaks at the middle shade, light shades (t < 0.2) gain 5 points and
/// dark shades (t > 0.8) lose 10. The result is clamped to `[20, 100]`.
/// A zero curve leaves saturation untouched.
#[must_use]
pub fn curved_saturation(base_saturation: f64, index: usize, count: usize, curve: i32) -> f64 {
    if curve == 0 || count <= 1 {
        return base_saturation;
    }

    let t = index as f64 / (count - 1) as f64;
    let bell = (t * std::f64::consts::PI).sin() * (f64::from(curve) / 100.0);

    let mut saturation = base_saturation + bell * base_saturation;
    if t < 0.2 {
        saturation += 5.0;
    } else if t > 0.8 {
        saturation -= 10.0;
    }

    saturation.clamp(20.0, 100.0)
}
