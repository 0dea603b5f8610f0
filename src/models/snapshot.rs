//! Persisted state of a palette session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color_set::ColorSet;
use super::formats::{ColorFormat, ExportFormat};

/// A persisted snapshot could not be read.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The stored text is not a valid snapshot
    #[error("Corrupt palette snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The stored text could not be read
    #[error("Cannot read palette snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to restore a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Palettes in display order
    pub color_sets: Vec<ColorSet>,
    /// Export format preference
    #[serde(default)]
    pub current_export_format: ExportFormat,
    /// Color value format preference
    #[serde(default)]
    pub current_color_format: ColorFormat,
    /// Id handed to the next created set
    #[serde(default = "first_id")]
    pub next_set_id: u32,
    /// When the snapshot was written
    #[serde(default = "Utc::now")]
    pub last_saved: DateTime<Utc>,
}

const fn first_id() -> u32 {
    1
}

impl Snapshot {
    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Corrupt`] if the text does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_sets() {
        let mut set = ColorSet::new(4, "#3B82F6", 3);
        set.colors = vec!["#A0C0FB".into(), "#3B82F6".into(), "#06245A".into()];
        set.custom_name = Some("Sky".into());

        let snapshot = Snapshot {
            color_sets: vec![set],
            current_export_format: ExportFormat::Tailwind,
            current_color_format: ColorFormat::Hsl,
            next_set_id: 5,
            last_saved: Utc::now(),
        };

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"currentExportFormat\": \"tailwind\""));
        assert!(json.contains("\"nextSetId\": 5"));

        let restored = Snapshot::from_json(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_missing_prefs_default() {
        let snapshot = Snapshot::from_json(r##"{"colorSets":[{"id":2,"baseColor":"#FF0000"}]}"##)
            .unwrap();
        assert_eq!(snapshot.current_export_format, ExportFormat::Css);
        assert_eq!(snapshot.current_color_format, ColorFormat::Hex);
        assert_eq!(snapshot.next_set_id, 1);
        assert_eq!(snapshot.color_sets[0].id, 2);
    }

    #[test]
    fn test_corrupt_snapshot_is_typed_error() {
        assert!(matches!(Snapshot::from_json("[1, 2"), Err(SnapshotError::Corrupt(_))));
        assert!(matches!(
            Snapshot::from_json(r#"{"colorSets": 3}"#),
            Err(SnapshotError::Corrupt(_))
        ));
    }
}
