//! Generate command: print the shades of a base color without storing them.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::color::bounds::{check_pair, CONTRAST_DOMAIN, LIGHTNESS_DOMAIN};
use crate::color::{generate_palette, normalize_hex, CurveMode, GenerationParams};
use crate::export::tailwind_weight;
use crate::models::{MAX_COLOR_COUNT, MIN_COLOR_COUNT};

/// Generate shades for a base color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Base color (#RRGGBB or #RGB)
    pub base_color: String,

    /// Number of shades (1-20, defaults to the configured count)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Spacing strategy (defaults to the configured mode)
    #[arg(long, value_enum)]
    pub mode: Option<CurveMode>,

    /// Contrast against white of the lightest shade (1-21)
    #[arg(long, value_name = "RATIO")]
    pub min_contrast: Option<f64>,

    /// Contrast against white of the darkest shade (1-21)
    #[arg(long, value_name = "RATIO")]
    pub max_contrast: Option<f64>,

    /// Lightness of the darkest shade (0-100)
    #[arg(long, value_name = "PERCENT")]
    pub min_lightness: Option<f64>,

    /// Lightness of the lightest shade (0-100)
    #[arg(long, value_name = "PERCENT")]
    pub max_lightness: Option<f64>,

    /// Saturation bias across shades (-100 to 100)
    #[arg(long, value_name = "N", default_value_t = 0, allow_hyphen_values = true)]
    pub saturation_curve: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOutput {
    base_color: String,
    mode: CurveMode,
    shades: Vec<ShadeOutput>,
}

#[derive(Serialize)]
struct ShadeOutput {
    weight: u32,
    hex: String,
}

impl GenerateArgs {
    fn params(&self, default_count: usize, default_mode: CurveMode) -> CliResult<GenerationParams> {
        let count = self.count.unwrap_or(default_count);
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
            return Err(CliError::validation(format!(
                "Color count {count} is out of range ({MIN_COLOR_COUNT}-{MAX_COLOR_COUNT})"
            )));
        }
        if !(-100..=100).contains(&self.saturation_curve) {
            return Err(CliError::validation(format!(
                "Saturation curve {} is out of range (-100 to 100)",
                self.saturation_curve
            )));
        }

        check_pair("contrast", self.min_contrast, self.max_contrast, CONTRAST_DOMAIN)
            .and_then(|()| {
                check_pair("lightness", self.min_lightness, self.max_lightness, LIGHTNESS_DOMAIN)
            })
            .map_err(|e| CliError::validation(e.to_string()))?;

        Ok(GenerationParams {
            count,
            min_contrast: self.min_contrast,
            max_contrast: self.max_contrast,
            min_lightness: self.min_lightness,
            max_lightness: self.max_lightness,
            saturation_curve: self.saturation_curve,
            mode: self.mode.unwrap_or(default_mode),
        })
    }

    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let base = normalize_hex(&self.base_color).map_err(|_| {
            CliError::validation(format!(
                "Invalid hex color '{}'. Expected #RRGGBB or #RGB",
                self.base_color
            ))
        })?;

        let config = load_config()?;
        let params = self.params(config.generation.color_count, config.generation.curve_mode)?;
        let colors = generate_palette(&base, &params)
            .map_err(|e| CliError::validation(format!("Failed to generate palette: {e}")))?;

        if self.json {
            let total = colors.len();
            let shades = colors
                .into_iter()
                .enumerate()
                .map(|(index, hex)| ShadeOutput {
                    weight: tailwind_weight(index, total),
                    hex,
                })
                .collect();
            return print_json(&GenerateOutput {
                base_color: base,
                mode: params.mode,
                shades,
            });
        }

        for hex in colors {
            println!("{hex}");
        }
        Ok(())
    }
}
