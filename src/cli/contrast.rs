//! Contrast command: WCAG ratio and pass flags for a color pair.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::color::{contrast_ratio, normalize_hex};
use crate::export::format_contrast;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;

/// Check the contrast between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground color (#RRGGBB or #RGB)
    pub foreground: String,

    /// Background color
    #[arg(default_value = "#FFFFFF")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Contrast of one pair against the WCAG thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// Normalized foreground
    pub foreground: String,
    /// Normalized background
    pub background: String,
    /// Ratio in `[1, 21]`
    pub ratio: f64,
    /// Ratio formatted like `4.5:1`
    pub label: String,
    /// Passes AA for normal text
    pub aa: bool,
    /// Passes AAA for normal text
    pub aaa: bool,
    /// Passes AA for large text
    pub aa_large: bool,
}

impl ContrastReport {
    /// Measures `foreground` against `background`.
    pub fn measure(foreground: &str, background: &str) -> CliResult<Self> {
        let foreground = normalize(foreground)?;
        let background = normalize(background)?;
        let ratio = contrast_ratio(&foreground, &background)
            .map_err(|e| CliError::validation(e.to_string()))?;

        Ok(Self {
            foreground,
            background,
            ratio,
            label: format_contrast(ratio),
            aa: ratio >= AA_NORMAL,
            aaa: ratio >= AAA_NORMAL,
            aa_large: ratio >= AA_LARGE,
        })
    }
}

fn normalize(value: &str) -> CliResult<String> {
    normalize_hex(value).map_err(|_| {
        CliError::validation(format!("Invalid hex color '{value}'. Expected #RRGGBB or #RGB"))
    })
}

const fn mark(pass: bool) -> &'static str {
    if pass {
        "✓"
    } else {
        "✗"
    }
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let report = ContrastReport::measure(&self.foreground, &self.background)?;

        if self.json {
            return print_json(&report);
        }

        println!(
            "{} on {}: {}",
            report.foreground, report.background, report.label
        );
        println!("  {} AA normal text  ({AA_NORMAL}:1)", mark(report.aa));
        println!("  {} AAA normal text ({AAA_NORMAL}:1)", mark(report.aaa));
        println!("  {} AA large text   ({AA_LARGE}:1)", mark(report.aa_large));
        Ok(())
    }
}
