//! Palette generation engine.
//!
//! - [`space`]: hex/RGB/HSL conversions and WCAG contrast
//! - [`curve`]: lightness and contrast curves, saturation curve
//! - [`exact`]: exact-hue synthesis
//! - [`generator`]: the palette generator built on the above
//! - [`naming`]: base color names
//! - [`bounds`]: lightness/contrast bound coupling for editors

pub mod bounds;
pub mod curve;
pub mod exact;
pub mod generator;
pub mod naming;
pub mod space;

pub use curve::{ContrastBounds, LightnessBounds};
pub use generator::{generate_monochromatic, generate_palette, CurveMode, GenerationParams, Tone};
pub use naming::{generated_name, ColorFamily};
pub use space::{contrast_ratio, hex_to_hsl, hex_to_rgb, hsl_to_hex, is_valid_hex, normalize_hex};
