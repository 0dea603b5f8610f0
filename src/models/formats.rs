//! Export target and color value format preferences.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Text format a palette is exported to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSS custom properties
    #[default]
    Css,
    /// SCSS variables
    Scss,
    /// Nested JSON object
    Json,
    /// Tailwind `module.exports` config stub
    Tailwind,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Json, Self::Tailwind];

    /// Lower-case identifier used in snapshots and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
        }
    }

    /// Conventional file extension for the rendered output.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown export format '{s}'. Expected css, scss, json or tailwind")
            })
    }
}

/// How individual color values are written inside an export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, 1)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, 1)`
    Hsla,
}

impl ColorFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 5] = [Self::Hex, Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla];

    /// Lower-case identifier used in snapshots and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown color format '{s}'. Expected hex, rgb, rgba, hsl or hsla")
            })
    }
}
