//! Color Themer Library
//!
//! This library generates tonal color palettes from a single base color,
//! manages an ordered, persisted collection of them, and exports them as
//! CSS, SCSS, JSON or Tailwind config.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use color::{generate_palette, CurveMode, GenerationParams};
pub use config::Config;
pub use models::{ColorSet, ColorSetUpdate, ImportData, Snapshot};
pub use services::{ColorThemer, FileStore, ImportMode, MemoryStore, SnapshotStore};
