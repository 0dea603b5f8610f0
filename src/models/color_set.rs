//! Color set: a named palette derived from one base color.
//!
//! Field names serialize in camelCase so snapshots and import files stay
//! readable by other tools working with the same JSON layout.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::color::bounds::{check_pair, CONTRAST_DOMAIN, LIGHTNESS_DOMAIN};
use crate::color::{generate_palette, generated_name, is_valid_hex, CurveMode, GenerationParams};

/// Shade count of a freshly created set.
pub const DEFAULT_COLOR_COUNT: usize = 11;
/// Smallest shade count accepted from users.
pub const MIN_COLOR_COUNT: usize = 1;
/// Largest shade count accepted from users.
pub const MAX_COLOR_COUNT: usize = 20;
/// Range of the saturation curve setting.
pub const SATURATION_CURVE_RANGE: std::ops::RangeInclusive<i32> = -100..=100;

const fn default_color_count() -> usize {
    DEFAULT_COLOR_COUNT
}

/// A palette derived from one base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    /// Unique id within the owning collection
    #[serde(default)]
    pub id: u32,
    /// Anchor color, emitted verbatim among the shades
    pub base_color: String,
    /// Number of shades
    #[serde(default = "default_color_count")]
    pub color_count: usize,
    /// Generated shades, lightest first
    #[serde(default)]
    pub colors: Vec<String>,
    /// User-chosen display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    /// Cached name derived from the base color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_name: Option<String>,
    /// Contrast against white of the lightest shade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_contrast: Option<f64>,
    /// Contrast against white of the darkest shade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_contrast: Option<f64>,
    /// Lightness of the darkest shade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lightness: Option<f64>,
    /// Lightness of the lightest shade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lightness: Option<f64>,
    /// Saturation bias across shades, `[-100, 100]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation_curve: Option<i32>,
}

impl ColorSet {
    /// Creates a set with default bounds and no shades yet.
    #[must_use]
    pub fn new(id: u32, base_color: impl Into<String>, color_count: usize) -> Self {
        let base_color = base_color.into();
        let generated_name = generated_name(&base_color).ok();
        Self {
            id,
            base_color,
            color_count,
            colors: Vec::new(),
            custom_name: None,
            generated_name,
            min_contrast: None,
            max_contrast: None,
            min_lightness: None,
            max_lightness: None,
            saturation_curve: None,
        }
    }

    /// Name shown to users: custom, else cached, else derived from the base.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.custom_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        if let Some(name) = self.generated_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        generated_name(&self.base_color).unwrap_or_else(|_| "Palette".to_string())
    }

    /// Export identifier: display name lower-cased, whitespace runs as `-`.
    #[must_use]
    pub fn slug(&self) -> String {
        self.display_name()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Generator inputs for this set.
    #[must_use]
    pub const fn generation_params(&self, mode: CurveMode) -> GenerationParams {
        GenerationParams {
            count: self.color_count,
            min_contrast: self.min_contrast,
            max_contrast: self.max_contrast,
            min_lightness: self.min_lightness,
            max_lightness: self.max_lightness,
            saturation_curve: match self.saturation_curve {
                Some(curve) => curve,
                None => 0,
            },
            mode,
        }
    }

    /// Whether stored shades are missing, out of step with `color_count`,
    /// or not `#RRGGBB` colors.
    #[must_use]
    pub fn needs_regeneration(&self) -> bool {
        self.colors.is_empty()
            || self.colors.len() != self.color_count
            || self.colors.iter().any(|hex| hex.len() != 7 || !is_valid_hex(hex))
    }

    /// Pulls stored settings back into their valid ranges.
    ///
    /// The count is clamped to 1-20 and the saturation curve to -100..=100.
    /// A bound pair outside its domain or crossed is dropped so the
    /// defaults apply. Returns true if anything changed, in which case the
    /// stored shades are cleared for regeneration.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        let count = self.color_count.clamp(MIN_COLOR_COUNT, MAX_COLOR_COUNT);
        if count != self.color_count {
            self.color_count = count;
            changed = true;
        }

        if let Some(curve) = self.saturation_curve {
            let clamped =
                curve.clamp(*SATURATION_CURVE_RANGE.start(), *SATURATION_CURVE_RANGE.end());
            if clamped != curve {
                self.saturation_curve = Some(clamped);
                changed = true;
            }
        }

        if check_pair("contrast", self.min_contrast, self.max_contrast, CONTRAST_DOMAIN).is_err() {
            self.min_contrast = None;
            self.max_contrast = None;
            changed = true;
        }
        if check_pair("lightness", self.min_lightness, self.max_lightness, LIGHTNESS_DOMAIN)
            .is_err()
        {
            self.min_lightness = None;
            self.max_lightness = None;
            changed = true;
        }

        if changed {
            self.colors.clear();
        }
        changed
    }

    /// Regenerates `colors` from the base color and bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_color` is not a valid hex color; `colors`
    /// is left untouched in that case.
    pub fn regenerate(&mut self, mode: CurveMode) -> Result<()> {
        self.colors = generate_palette(&self.base_color, &self.generation_params(mode))?;
        Ok(())
    }

    /// Re-derives the cached name from the current base color.
    pub fn refresh_generated_name(&mut self) {
        self.generated_name = generated_name(&self.base_color).ok();
    }
}

/// Partial update merged into a [`ColorSet`].
///
/// `None` leaves a field unchanged. An empty `custom_name` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSetUpdate {
    /// New base color (`#RRGGBB` or `#RGB`)
    pub base_color: Option<String>,
    /// New shade count
    pub color_count: Option<usize>,
    /// New display name; empty clears
    pub custom_name: Option<String>,
    /// New lightest-shade contrast
    pub min_contrast: Option<f64>,
    /// New darkest-shade contrast
    pub max_contrast: Option<f64>,
    /// New darkest-shade lightness
    pub min_lightness: Option<f64>,
    /// New lightest-shade lightness
    pub max_lightness: Option<f64>,
    /// New saturation curve
    pub saturation_curve: Option<i32>,
}

impl ColorSetUpdate {
    /// Whether applying this update requires new shades.
    #[must_use]
    pub const fn triggers_regeneration(&self) -> bool {
        self.base_color.is_some()
            || self.color_count.is_some()
            || self.min_contrast.is_some()
            || self.max_contrast.is_some()
            || self.min_lightness.is_some()
            || self.max_lightness.is_some()
            || self.saturation_curve.is_some()
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the set fields into `set` without regenerating.
    pub fn apply_to(&self, set: &mut ColorSet) {
        if let Some(base) = &self.base_color {
            set.base_color.clone_from(base);
            set.refresh_generated_name();
        }
        if let Some(count) = self.color_count {
            set.color_count = count;
        }
        if let Some(name) = &self.custom_name {
            let name = name.trim();
            set.custom_name = (!name.is_empty()).then(|| name.to_string());
        }
        if self.min_contrast.is_some() {
            set.min_contrast = self.min_contrast;
        }
        if self.max_contrast.is_some() {
            set.max_contrast = self.max_contrast;
        }
        if self.min_lightness.is_some() {
            set.min_lightness = self.min_lightness;
        }
        if self.max_lightness.is_some() {
            set.max_lightness = self.max_lightness;
        }
        if self.saturation_curve.is_some() {
            set.saturation_curve = self.saturation_curve;
        }
    }
}
