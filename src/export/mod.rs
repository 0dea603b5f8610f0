//! Export functionality for color sets.
//!
//! This module renders palettes as CSS, SCSS, JSON, or Tailwind config text,
//! formats individual color values, and computes per-shade swatch metadata
//! (weight labels, contrast ratios, readable text colors).

pub mod color_format;
pub mod formats;
pub mod swatch;
pub mod weight;

pub use color_format::format_color;
pub use formats::{render_css, render_json, render_palette, render_scss, render_tailwind};
pub use swatch::{format_contrast, swatches, text_color_for, Swatch, DARK_TEXT, LIGHT_TEXT};
pub use weight::{tailwind_weight, tailwind_weights};
