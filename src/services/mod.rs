//! Service layer for palette state.
//!
//! [`ColorThemer`] owns the palette collection and its preferences;
//! [`SnapshotStore`] implementations persist it between sessions.

pub mod store;
pub mod themer;

pub use store::{FileStore, MemoryStore, SnapshotStore};
pub use themer::{ColorThemer, ImportMode, ImportSummary, Observer, ThemerError};
