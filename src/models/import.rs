//! Import/export file schema for whole palette collections.
//!
//! The file is a JSON object with a required `colorSets` array. `version`,
//! `exportedAt` and `metadata` are written on export but optional on
//! import. Validation is all-or-nothing: one bad set rejects the file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::color_set::{ColorSet, MAX_COLOR_COUNT, MIN_COLOR_COUNT, SATURATION_CURVE_RANGE};
use crate::color::bounds::{check_pair, CONTRAST_DOMAIN, LIGHTNESS_DOMAIN};
use crate::color::normalize_hex;

/// Schema version written on export.
pub const EXPORT_VERSION: &str = "1.0";

fn default_version() -> String {
    EXPORT_VERSION.to_string()
}

/// Why an import file was rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not JSON, or a field has the wrong type
    #[error("Invalid import file: {0}")]
    Parse(#[from] serde_json::Error),
    /// No `colorSets` array at the top level
    #[error("Invalid import file: missing colorSets array")]
    MissingColorSets,
    /// `colorSets` is present but empty
    #[error("Import file contains no color sets")]
    Empty,
    /// A set's base color is not a hex color
    #[error("Color set {index}: invalid base color '{value}'")]
    InvalidBaseColor {
        /// Position in the `colorSets` array
        index: usize,
        /// Offending value
        value: String,
    },
    /// A set's shade count is out of range
    #[error("Color set {index}: color count {count} is out of range (1-20)")]
    InvalidColorCount {
        /// Position in the `colorSets` array
        index: usize,
        /// Offending value
        count: usize,
    },
    /// A stored shade is not a hex color
    #[error("Color set {index}: invalid shade '{value}'")]
    InvalidShade {
        /// Position in the `colorSets` array
        index: usize,
        /// Offending value
        value: String,
    },
    /// A contrast or lightness bound is out of its domain, or min exceeds max
    #[error("Color set {index}: {reason}")]
    InvalidBounds {
        /// Position in the `colorSets` array
        index: usize,
        /// What is wrong with the pair
        reason: String,
    },
    /// A set's saturation curve is outside -100..=100
    #[error("Color set {index}: saturation curve {curve} is out of range (-100 to 100)")]
    InvalidSaturationCurve {
        /// Position in the `colorSets` array
        index: usize,
        /// Offending value
        curve: i32,
    },
}

/// Summary numbers stored alongside exported palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportMetadata {
    /// Number of palettes in the file
    #[serde(default)]
    pub total_palettes: usize,
    /// Number of shades across all palettes
    #[serde(default)]
    pub total_colors: usize,
}

/// A collection of palettes as written by export and read by import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: String,
    /// When the file was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Palettes
    pub color_sets: Vec<ColorSet>,
    /// Counts, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImportMetadata>,
}

impl ImportData {
    /// Wraps `color_sets` for export, stamping time and counts.
    #[must_use]
    pub fn for_export(color_sets: Vec<ColorSet>, exported_at: DateTime<Utc>) -> Self {
        let metadata = ImportMetadata {
            total_palettes: color_sets.len(),
            total_colors: color_sets.iter().map(|set| set.colors.len()).sum(),
        };
        Self {
            version: default_version(),
            exported_at: Some(exported_at),
            color_sets,
            metadata: Some(metadata),
        }
    }

    /// Parses and validates an import file.
    ///
    /// Short `#RGB` base colors are expanded in place.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] if the text is not JSON, lacks a
    /// `colorSets` array, or any set fails validation.
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.get("colorSets").is_some_and(Value::is_array) {
            return Err(ImportError::MissingColorSets);
        }

        let mut data: Self = serde_json::from_value(value)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks every set and normalizes base colors and shades.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&mut self) -> Result<(), ImportError> {
        if self.color_sets.is_empty() {
            return Err(ImportError::Empty);
        }

        for (index, set) in self.color_sets.iter_mut().enumerate() {
            set.base_color = normalize_hex(&set.base_color).map_err(|_| {
                ImportError::InvalidBaseColor {
                    index,
                    value: set.base_color.clone(),
                }
            })?;

            if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&set.color_count) {
                return Err(ImportError::InvalidColorCount {
                    index,
                    count: set.color_count,
                });
            }

            if let Some(curve) = set.saturation_curve {
                if !SATURATION_CURVE_RANGE.contains(&curve) {
                    return Err(ImportError::InvalidSaturationCurve { index, curve });
                }
            }

            check_pair("contrast", set.min_contrast, set.max_contrast, CONTRAST_DOMAIN)
                .and_then(|()| {
                    check_pair("lightness", set.min_lightness, set.max_lightness, LIGHTNESS_DOMAIN)
                })
                .map_err(|e| ImportError::InvalidBounds {
                    index,
                    reason: e.to_string(),
                })?;

            for shade in &mut set.colors {
                *shade = normalize_hex(shade).map_err(|_| ImportError::InvalidShade {
                    index,
                    value: shade.clone(),
                })?;
            }
        }

        Ok(())
    }

    /// Default file name for an export written on `date`.
    #[must_use]
    pub fn default_file_name(date: DateTime<Utc>) -> String {
        format!("color-palettes-{}.json", date.format("%Y-%m-%d"))
    }
}
