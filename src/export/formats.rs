//! Palette renderers for CSS, SCSS, JSON and Tailwind.
//!
//! Every renderer names shades `{slug}-{weight}`, where the slug comes from
//! the set's display name and the weight from [`tailwind_weight`].

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};

use super::color_format::format_color;
use super::weight::tailwind_weight;
use crate::color::naming::capitalize;
use crate::models::{ColorFormat, ColorSet, ExportFormat};

/// Weight and formatted value of every shade, lightest first.
fn formatted_shades(set: &ColorSet, color_format: ColorFormat) -> Result<Vec<(u32, String)>> {
    let total = set.colors.len();
    set.colors
        .iter()
        .enumerate()
        .map(|(index, hex)| -> Result<(u32, String)> {
            Ok((tailwind_weight(index, total), format_color(hex, color_format)?))
        })
        .collect()
}

/// Renders one palette in `format`.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn render_palette(
    set: &ColorSet,
    format: ExportFormat,
    color_format: ColorFormat,
) -> Result<String> {
    match format {
        ExportFormat::Css => render_css(set, color_format),
        ExportFormat::Scss => render_scss(set, color_format),
        ExportFormat::Json => render_json(set, color_format),
        ExportFormat::Tailwind => render_tailwind(set, color_format),
    }
}

/// CSS custom properties, one `--{slug}-{weight}: {value};` line per shade.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn render_css(set: &ColorSet, color_format: ColorFormat) -> Result<String> {
    let slug = set.slug();
    let mut output = String::new();

    for (weight, value) in formatted_shades(set, color_format)? {
        let _ = writeln!(output, "--{slug}-{weight}: {value};");
    }

    Ok(output)
}

/// SCSS variables under a `// {Name} Color Palette` header.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn render_scss(set: &ColorSet, color_format: ColorFormat) -> Result<String> {
    let slug = set.slug();
    let mut output = String::new();

    let _ = writeln!(output, "// {} Color Palette", capitalize(&set.display_name()));
    for (weight, value) in formatted_shades(set, color_format)? {
        let _ = writeln!(output, "${slug}-{weight}: {value};");
    }

    Ok(output)
}

/// `{ "slug": { "50": value, ... } }`, pretty-printed with two spaces.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn render_json(set: &ColorSet, color_format: ColorFormat) -> Result<String> {
    let shades: BTreeMap<u32, String> = formatted_shades(set, color_format)?.into_iter().collect();
    let mut root = BTreeMap::new();
    root.insert(set.slug(), shades);

    serde_json::to_string_pretty(&root).context("Failed to serialize palette as JSON")
}

/// A `module.exports` Tailwind config extending `theme.colors`.
///
/// # Errors
///
/// Returns an error if a stored shade cannot be decoded.
pub fn render_tailwind(set: &ColorSet, color_format: ColorFormat) -> Result<String> {
    let slug = set.slug();
    let mut output = String::new();

    output.push_str("module.exports = {\n");
    output.push_str("  theme: {\n");
    output.push_str("    extend: {\n");
    output.push_str("      colors: {\n");
    let _ = writeln!(output, "        {slug}: {{");
    for (weight, value) in formatted_shades(set, color_format)? {
        let _ = writeln!(output, "          {weight}: '{value}',");
    }
    output.push_str("        }\n");
    output.push_str("      }\n");
    output.push_str("    }\n");
    output.push_str("  }\n");
    output.push('}');

    Ok(output)
}
