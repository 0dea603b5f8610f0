//! Palette generation: base color plus bounds in, ordered shades out.
//!
//! The generator is deterministic. It classifies the base color, builds a
//! lightness curve, and turns every curve point into a hex color. The base
//! color itself is always emitted verbatim at its natural rank.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::curve::{
    contrast_curve, curved_saturation, lightness_curve, ContrastBounds, LightnessBounds,
};
use super::exact::synthesize_exact;
use super::space::{hex_to_rgb, normalize_hex};
use crate::models::{Hsl, RgbColor};

/// Saturation below which a base color is treated as neutral.
const NEUTRAL_SATURATION: f64 = 5.0;
/// Lightness below which a base color is treated as neutral.
const NEUTRAL_DARK: f64 = 20.0;
/// Lightness above which a base color is treated as neutral.
const NEUTRAL_LIGHT: f64 = 80.0;
/// Lightness step used to pull a misordered shade back past its neighbor.
const ORDER_NUDGE: f64 = 1.0;
/// Synthesis attempts per shade before falling back to the plain encoding.
const ORDER_ATTEMPTS: usize = 4;
/// Headroom for 8-bit quantization of the plain encoding (at most 0.2).
const QUANTIZE_MARGIN: f64 = 0.5;

/// Strategy used to lay out shade lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    /// Evenly spaced lightness between the lightness bounds
    #[default]
    Lightness,
    /// Evenly spaced contrast against white between the contrast bounds
    Contrast,
}

impl CurveMode {
    /// Config-file spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for CurveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurveMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lightness" => Ok(Self::Lightness),
            "contrast" => Ok(Self::Contrast),
            other => anyhow::bail!("Unknown curve mode '{other}'. Expected lightness or contrast"),
        }
    }
}

/// How a base color's shades are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Zero saturation: shades are pure grays
    Gray,
    /// Low saturation or extreme lightness: shades keep the base tint as is
    Tinted,
    /// Everything else: shades are synthesized to the base's exact hue
    Chromatic,
}

impl Tone {
    /// Classifies a decoded base color.
    #[must_use]
    pub fn classify(hsl: Hsl) -> Self {
        let neutral =
            hsl.s < NEUTRAL_SATURATION || hsl.l < NEUTRAL_DARK || hsl.l > NEUTRAL_LIGHT;
        if !neutral {
            Self::Chromatic
        } else if hsl.s == 0.0 {
            Self::Gray
        } else {
            Self::Tinted
        }
    }
}

/// Inputs to [`generate_palette`] besides the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Number of shades to produce
    pub count: usize,
    /// Contrast of the lightest shade against white
    pub min_contrast: Option<f64>,
    /// Contrast of the darkest shade against white
    pub max_contrast: Option<f64>,
    /// Lightness of the darkest shade
    pub min_lightness: Option<f64>,
    /// Lightness of the lightest shade
    pub max_lightness: Option<f64>,
    /// Saturation bias across the palette, `[-100, 100]`
    pub saturation_curve: i32,
    /// Curve strategy
    pub mode: CurveMode,
}

impl GenerationParams {
    /// Default bounds for `count` shades.
    #[must_use]
    pub const fn with_count(count: usize) -> Self {
        Self {
            count,
            min_contrast: None,
            max_contrast: None,
            min_lightness: None,
            max_lightness: None,
            saturation_curve: 0,
            mode: CurveMode::Lightness,
        }
    }

    /// Whether the contrast-targeted curve applies.
    ///
    /// Explicit lightness bounds always win over contrast targeting.
    #[must_use]
    pub const fn uses_contrast_curve(&self) -> bool {
        matches!(self.mode, CurveMode::Contrast)
            && !(self.min_lightness.is_some() && self.max_lightness.is_some())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::with_count(11)
    }
}

/// Generates the shades of a palette, lightest first.
///
/// `base_hex` may be `#RRGGBB` or `#RGB`; the expanded form appears
/// verbatim in the output. Returns an empty palette for a zero count.
///
/// # Errors
///
/// Returns an error if `base_hex` is not a valid hex color.
pub fn generate_palette(base_hex: &str, params: &GenerationParams) -> Result<Vec<String>> {
    let base_hex = normalize_hex(base_hex)?;
    let base_rgb = hex_to_rgb(&base_hex)?;
    let base = base_rgb.to_hsl();
    let count = params.count;

    if count == 0 {
        return Ok(Vec::new());
    }

    let curve = if params.uses_contrast_curve() {
        let bounds = ContrastBounds::from_options(params.min_contrast, params.max_contrast);
        contrast_curve(base.h, base.s, count, bounds, base_rgb)
    } else {
        let bounds = LightnessBounds::from_options(params.min_lightness, params.max_lightness);
        lightness_curve(count, bounds, base.l)
    };

    let tone = Tone::classify(base);
    let exact_hue = base.h.round().rem_euclid(360.0);
    let exact_saturation = base.s.round();

    let shade_at = |i: usize| {
        let (h, s) = match tone {
            Tone::Gray => (0.0, 0.0),
            Tone::Tinted => (base.h, base.s),
            Tone::Chromatic => (
                exact_hue,
                curved_saturation(exact_saturation, i, count, params.saturation_curve).round(),
            ),
        };
        move |lightness: f64| match tone {
            Tone::Chromatic => synthesize_exact(h, s, lightness),
            Tone::Gray | Tone::Tinted => RgbColor::from_hsl(h, s, lightness),
        }
    };

    // Shades are placed outward from the base so each one is checked
    // against the neighbor already fixed on the base side.
    let mut colors = vec![String::new(); count];
    colors[curve.base_index] = base_hex;

    let mut limit = base.l;
    for (i, &target) in curve.values.iter().enumerate().skip(curve.base_index + 1) {
        let color = ordered_shade(shade_at(i), target, limit, Side::Darker);
        limit = color.to_hsl().l;
        colors[i] = color.to_hex();
    }

    let mut limit = base.l;
    for (i, &target) in curve.values.iter().enumerate().take(curve.base_index).rev() {
        let color = ordered_shade(shade_at(i), target, limit, Side::Lighter);
        limit = color.to_hsl().l;
        colors[i] = color.to_hex();
    }

    Ok(colors)
}

/// Which side of its already placed neighbor a shade must land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Lighter,
    Darker,
}

impl Side {
    fn clamp(self, lightness: f64, limit: f64) -> f64 {
        match self {
            Self::Lighter => lightness.max(limit),
            Self::Darker => lightness.min(limit),
        }
    }

    fn holds(self, lightness: f64, limit: f64) -> bool {
        match self {
            Self::Lighter => lightness >= limit,
            Self::Darker => lightness <= limit,
        }
    }

    fn step(self, lightness: f64, by: f64) -> f64 {
        match self {
            Self::Lighter => (lightness + by).min(100.0),
            Self::Darker => (lightness - by).max(0.0),
        }
    }

    const fn extreme(self) -> RgbColor {
        match self {
            Self::Lighter => RgbColor::WHITE,
            Self::Darker => RgbColor::BLACK,
        }
    }
}

/// Synthesizes a shade near `target` whose decoded lightness is on `side`
/// of `limit`.
///
/// Exact synthesis may move lightness by a few points, so a shade that
/// lands past its neighbor is retried further away. If that keeps failing
/// the shade is encoded plainly just inside the limit, giving up exact hue
/// for order.
fn ordered_shade(
    shade: impl Fn(f64) -> RgbColor,
    target: f64,
    limit: f64,
    side: Side,
) -> RgbColor {
    let mut lightness = side.clamp(target, limit);
    for _ in 0..ORDER_ATTEMPTS {
        let color = shade(lightness);
        if side.holds(color.to_hsl().l, limit) {
            return color;
        }
        lightness = side.step(lightness, ORDER_NUDGE);
    }

    let fallback = shade(side.step(limit, QUANTIZE_MARGIN));
    if side.holds(fallback.to_hsl().l, limit) {
        return fallback;
    }
    let hsl = fallback.to_hsl();
    let plain = RgbColor::from_hsl(hsl.h, hsl.s, side.step(limit, QUANTIZE_MARGIN));
    if side.holds(plain.to_hsl().l, limit) {
        plain
    } else {
        side.extreme()
    }
}

/// Generates `count` shades with default bounds and no saturation curve.
///
/// # Errors
///
/// Returns an error if `base_hex` is not a valid hex color.
pub fn generate_monochromatic(base_hex: &str, count: usize) -> Result<Vec<String>> {
    generate_palette(base_hex, &GenerationParams::with_count(count))
}
