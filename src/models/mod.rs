//! Data models for palettes, persisted state, and import files.
//!
//! Models carry no I/O; services and the CLI load and store them.

pub mod color_set;
pub mod formats;
pub mod import;
pub mod rgb;
pub mod snapshot;

// Re-export all model types
pub use color_set::{
    ColorSet, ColorSetUpdate, DEFAULT_COLOR_COUNT, MAX_COLOR_COUNT, MIN_COLOR_COUNT,
    SATURATION_CURVE_RANGE,
};
pub use formats::{ColorFormat, ExportFormat};
pub use import::{ImportData, ImportError, ImportMetadata, EXPORT_VERSION};
pub use rgb::{Hsl, RgbColor};
pub use snapshot::{Snapshot, SnapshotError};
