//! Palette orchestration service.
//!
//! [`ColorThemer`] owns the ordered collection of color sets, decides when
//! a set needs new shades, persists every change through a
//! [`SnapshotStore`], and tells registered observers about the new state.
//!
//! The collection is never empty: removing the last set, clearing all data,
//! or starting from an empty or unreadable store creates a fresh set with a
//! random base color. Randomness is confined to that initial pick; shade
//! generation itself is deterministic.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::store::SnapshotStore;
use crate::color::bounds::{
    check_pair, contrast_bounds_for, lightness_bounds_for, CONTRAST_DOMAIN, LIGHTNESS_DOMAIN,
};
use crate::color::curve::{
    DEFAULT_MAX_CONTRAST, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_CONTRAST, DEFAULT_MIN_LIGHTNESS,
};
use crate::color::{hsl_to_hex, is_valid_hex, normalize_hex, CurveMode};
use crate::export::render_palette;
use crate::models::{
    ColorFormat, ColorSet, ColorSetUpdate, ExportFormat, ImportData, ImportError, Snapshot,
    DEFAULT_COLOR_COUNT, MAX_COLOR_COUNT, MIN_COLOR_COUNT, SATURATION_CURVE_RANGE,
};

/// Callback invoked with the collection after every change.
pub type Observer = Box<dyn Fn(&[ColorSet])>;

/// A mutation was rejected; the collection is unchanged.
#[derive(Debug, Error)]
pub enum ThemerError {
    /// No set carries the requested id
    #[error("No color set with id {0}")]
    UnknownSet(u32),
    /// A base color failed hex validation
    #[error("Invalid hex color '{0}'. Expected #RRGGBB or #RGB")]
    InvalidColor(String),
    /// A shade count is outside 1-20
    #[error("Color count {0} is out of range (1-20)")]
    InvalidColorCount(usize),
    /// A saturation curve is outside -100..=100
    #[error("Saturation curve {0} is out of range (-100 to 100)")]
    InvalidSaturationCurve(i32),
    /// A bound is out of its domain or min exceeds max
    #[error("{0}")]
    InvalidBounds(String),
    /// Shade generation failed
    #[error("Failed to generate palette: {0}")]
    Generation(#[from] anyhow::Error),
}

/// How imported sets combine with the existing collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Append sets that are not already present
    #[default]
    Merge,
    /// Discard the collection and renumber imported sets from 1
    Replace,
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Sets added to the collection
    pub imported: usize,
    /// Sets skipped as duplicates
    pub skipped: usize,
}

impl ImportSummary {
    /// User-facing summary line.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Successfully imported {} palette(s) ({} duplicate(s) skipped)",
            self.imported, self.skipped
        )
    }
}

/// Stateful palette service for one session.
pub struct ColorThemer {
    color_sets: Vec<ColorSet>,
    export_format: ExportFormat,
    color_format: ColorFormat,
    next_set_id: u32,
    curve_mode: CurveMode,
    default_count: usize,
    store: Box<dyn SnapshotStore>,
    rng: StdRng,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for ColorThemer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorThemer")
            .field("color_sets", &self.color_sets)
            .field("export_format", &self.export_format)
            .field("color_format", &self.color_format)
            .field("next_set_id", &self.next_set_id)
            .field("curve_mode", &self.curve_mode)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl ColorThemer {
    /// Opens a session backed by `store`, with an OS-seeded random source.
    pub fn new(store: impl SnapshotStore + 'static) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Opens a session with a fixed seed, for reproducible new sets.
    pub fn with_seed(store: impl SnapshotStore + 'static, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    /// Opens a session with lightness curves and the default shade count.
    pub fn with_rng(store: impl SnapshotStore + 'static, rng: StdRng) -> Self {
        Self::with_options(store, rng, CurveMode::Lightness, DEFAULT_COLOR_COUNT)
    }

    /// Opens a session with explicit generation defaults.
    ///
    /// The stored snapshot is restored. Sets whose shades are missing or do
    /// not match their count are regenerated. An unreadable snapshot is
    /// logged and replaced by an empty collection, which then receives one
    /// default set.
    pub fn with_options(
        store: impl SnapshotStore + 'static,
        rng: StdRng,
        curve_mode: CurveMode,
        default_count: usize,
    ) -> Self {
        let mut themer = Self {
            color_sets: Vec::new(),
            export_format: ExportFormat::default(),
            color_format: ColorFormat::default(),
            next_set_id: 1,
            curve_mode,
            default_count: default_count.clamp(MIN_COLOR_COUNT, MAX_COLOR_COUNT),
            store: Box::new(store),
            rng,
            observers: Vec::new(),
        };
        themer.restore();
        themer
    }

    fn restore(&mut self) {
        match self.store.load() {
            Ok(Some(snapshot)) => {
                let invalid = snapshot
                    .color_sets
                    .iter()
                    .find(|set| !is_valid_hex(&set.base_color))
                    .map(|set| (set.id, set.base_color.clone()));
                match invalid {
                    Some((id, base)) => warn!(
                        "Discarding saved palettes: set {id} has invalid base color '{base}'"
                    ),
                    None => self.apply_snapshot(snapshot),
                }
            }
            Ok(None) => debug!("No saved palettes found"),
            Err(e) => warn!("Failed to load saved palettes, starting fresh: {e}"),
        }

        if self.color_sets.is_empty() {
            self.add_color_set();
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.color_sets = snapshot.color_sets;
        self.export_format = snapshot.current_export_format;
        self.color_format = snapshot.current_color_format;

        for set in &mut self.color_sets {
            if set.sanitize() {
                warn!("Saved color set {} had out-of-range settings, clamped", set.id);
            }
        }

        let max_id = self.color_sets.iter().map(|set| set.id).max().unwrap_or(0);
        self.next_set_id = snapshot.next_set_id.max(max_id + 1);

        let regenerated = self.regenerate_stale();
        debug!(
            "Restored {} palette(s), regenerated {regenerated}",
            self.color_sets.len()
        );
        if regenerated > 0 {
            self.persist();
        }
    }

    /// Regenerates sets whose shades are missing or out of step.
    fn regenerate_stale(&mut self) -> usize {
        let mode = self.curve_mode;
        let mut regenerated = 0;
        for set in self.color_sets.iter_mut().filter(|set| set.needs_regeneration()) {
            if set.generated_name.is_none() {
                set.refresh_generated_name();
            }
            match set.regenerate(mode) {
                Ok(()) => regenerated += 1,
                Err(e) => warn!("Failed to regenerate color set {}: {e}", set.id),
            }
        }
        regenerated
    }

    /// Registers a callback run after every change.
    pub fn subscribe(&mut self, observer: impl Fn(&[ColorSet]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.color_sets);
        }
    }

    /// Writes the current state. Failures are logged, never returned.
    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            warn!("Failed to save palettes: {e:#}");
        }
    }

    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    /// Current state as a persistable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            color_sets: self.color_sets.clone(),
            current_export_format: self.export_format,
            current_color_format: self.color_format,
            next_set_id: self.next_set_id,
            last_saved: Utc::now(),
        }
    }

    /// All sets in display order.
    #[must_use]
    pub fn color_sets(&self) -> &[ColorSet] {
        &self.color_sets
    }

    /// The set with `id`, if any.
    #[must_use]
    pub fn color_set(&self, id: u32) -> Option<&ColorSet> {
        self.color_sets.iter().find(|set| set.id == id)
    }

    /// Curve strategy used for regeneration.
    #[must_use]
    pub const fn curve_mode(&self) -> CurveMode {
        self.curve_mode
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_set_id;
        self.next_set_id += 1;
        id
    }

    /// Adds a set with a random base color and returns its id.
    ///
    /// Hue is drawn from `[0, 360)`, saturation from `[40, 100]` and
    /// lightness from `[30, 70]`.
    pub fn add_color_set(&mut self) -> u32 {
        let h = self.rng.random_range(0.0..360.0);
        let s = self.rng.random_range(40.0..=100.0);
        let l = self.rng.random_range(30.0..=70.0);
        let base = hsl_to_hex(h, s, l);

        let id = self.take_id();
        let mut set = ColorSet::new(id, base, self.default_count);
        if let Err(e) = set.regenerate(self.curve_mode) {
            warn!("Failed to generate color set {id}: {e}");
        }

        info!("Added color set {id} ({})", set.base_color);
        self.color_sets.push(set);
        self.commit();
        id
    }

    /// Adds a set with a chosen base color and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ThemerError::InvalidColor`] if `base_color` is not a hex
    /// color, or [`ThemerError::InvalidColorCount`] for a count outside 1-20.
    pub fn add_color_set_with_base(
        &mut self,
        base_color: &str,
        color_count: Option<usize>,
    ) -> Result<u32, ThemerError> {
        let base = normalize_hex(base_color)
            .map_err(|_| ThemerError::InvalidColor(base_color.to_string()))?;
        let count = color_count.unwrap_or(self.default_count);
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
            return Err(ThemerError::InvalidColorCount(count));
        }

        let mut set = ColorSet::new(self.next_set_id, base, count);
        set.regenerate(self.curve_mode)?;
        let id = self.take_id();

        info!("Added color set {id} ({})", set.base_color);
        self.color_sets.push(set);
        self.commit();
        Ok(id)
    }

    /// Removes the set with `id`. Returns false if there is none.
    ///
    /// Removing the last set immediately adds a new default one.
    pub fn remove_color_set(&mut self, id: u32) -> bool {
        let before = self.color_sets.len();
        self.color_sets.retain(|set| set.id != id);
        if self.color_sets.len() == before {
            return false;
        }

        info!("Removed color set {id}");
        if self.color_sets.is_empty() {
            self.add_color_set();
        } else {
            self.commit();
        }
        true
    }

    /// Moves the set at `from` to position `to`.
    ///
    /// Equal or out-of-bounds indices are a silent no-op returning false.
    pub fn reorder_color_sets(&mut self, from: usize, to: usize) -> bool {
        let len = self.color_sets.len();
        if from == to || from >= len || to >= len {
            return false;
        }

        let set = self.color_sets.remove(from);
        self.color_sets.insert(to, set);
        debug!("Moved color set from {from} to {to}");
        self.commit();
        true
    }

    /// Merges `update` into the set with `id`, regenerating when a base
    /// color, count, bound or saturation curve changes.
    ///
    /// Validation happens before anything is modified.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemerError`] for an unknown id or an invalid value.
    pub fn update_color_set(
        &mut self,
        id: u32,
        mut update: ColorSetUpdate,
    ) -> Result<(), ThemerError> {
        let index = self
            .color_sets
            .iter()
            .position(|set| set.id == id)
            .ok_or(ThemerError::UnknownSet(id))?;

        if let Some(base) = &update.base_color {
            let normalized =
                normalize_hex(base).map_err(|_| ThemerError::InvalidColor(base.clone()))?;
            update.base_color = Some(normalized);
        }
        if let Some(count) = update.color_count {
            if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
                return Err(ThemerError::InvalidColorCount(count));
            }
        }
        if let Some(curve) = update.saturation_curve {
            if !SATURATION_CURVE_RANGE.contains(&curve) {
                return Err(ThemerError::InvalidSaturationCurve(curve));
            }
        }

        let mut set = self.color_sets[index].clone();
        update.apply_to(&mut set);

        check_pair("contrast", set.min_contrast, set.max_contrast, CONTRAST_DOMAIN)
            .and_then(|()| {
                check_pair("lightness", set.min_lightness, set.max_lightness, LIGHTNESS_DOMAIN)
            })
            .map_err(|e| ThemerError::InvalidBounds(e.to_string()))?;
        sync_bounds(&update, &mut set, self.curve_mode);

        if update.triggers_regeneration() {
            set.regenerate(self.curve_mode)?;
            debug!("Regenerated color set {id} with {} shades", set.colors.len());
        }

        self.color_sets[index] = set;
        self.commit();
        Ok(())
    }

    /// Regenerates every set, e.g. after the curve mode changed.
    pub fn regenerate_all(&mut self) {
        let mode = self.curve_mode;
        for set in &mut self.color_sets {
            if let Err(e) = set.regenerate(mode) {
                warn!("Failed to regenerate color set {}: {e}", set.id);
            }
        }
        self.commit();
    }

    /// Switches the curve strategy and regenerates when it changes.
    pub fn set_curve_mode(&mut self, mode: CurveMode) {
        if self.curve_mode != mode {
            self.curve_mode = mode;
            self.regenerate_all();
        }
    }

    fn is_duplicate(&self, incoming: &ColorSet) -> bool {
        let incoming_name = incoming.custom_name.as_deref().filter(|n| !n.is_empty());
        self.color_sets.iter().any(|existing| {
            let existing_name = existing.custom_name.as_deref().filter(|n| !n.is_empty());
            match (existing_name, incoming_name) {
                (Some(a), Some(b)) => a == b,
                (None, None) => existing.base_color.eq_ignore_ascii_case(&incoming.base_color),
                _ => false,
            }
        })
    }

    /// Imports palettes from an import file.
    ///
    /// In merge mode a set is skipped when an existing one has the same
    /// custom name (both named) or the same base color (neither named);
    /// the rest get fresh ids. Replace mode discards the collection and
    /// numbers the imported sets from 1. Sets without valid shades are
    /// regenerated afterwards.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] if validation fails; nothing is changed.
    pub fn process_import(
        &mut self,
        mut data: ImportData,
        mode: ImportMode,
    ) -> Result<ImportSummary, ImportError> {
        data.validate()?;

        let mut summary = ImportSummary {
            imported: 0,
            skipped: 0,
        };

        match mode {
            ImportMode::Replace => {
                self.color_sets.clear();
                self.next_set_id = 1;
                for mut set in data.color_sets {
                    set.id = self.take_id();
                    self.color_sets.push(set);
                    summary.imported += 1;
                }
            }
            ImportMode::Merge => {
                for mut set in data.color_sets {
                    if self.is_duplicate(&set) {
                        debug!("Skipping duplicate palette '{}'", set.display_name());
                        summary.skipped += 1;
                        continue;
                    }
                    set.id = self.take_id();
                    self.color_sets.push(set);
                    summary.imported += 1;
                }
            }
        }

        self.regenerate_stale();
        info!("{}", summary.message());
        self.commit();
        Ok(summary)
    }

    /// Parses and imports an import file in one step.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] if the text is invalid; nothing is changed.
    pub fn import_json(&mut self, json: &str, mode: ImportMode) -> Result<ImportSummary, ImportError> {
        let data = ImportData::parse(json)?;
        self.process_import(data, mode)
    }

    /// All palettes in the import file schema.
    #[must_use]
    pub fn export_all(&self) -> ImportData {
        ImportData::for_export(self.color_sets.clone(), Utc::now())
    }

    /// Renders the set with `id` using the current format preferences.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown id or an undecodable stored shade.
    pub fn export_color_set(&self, id: u32) -> anyhow::Result<String> {
        let set = self.color_set(id).ok_or(ThemerError::UnknownSet(id))?;
        render_palette(set, self.export_format, self.color_format)
    }

    /// Drops every set and preference, then adds one default set.
    pub fn clear_all_data(&mut self) {
        self.color_sets.clear();
        self.export_format = ExportFormat::default();
        self.color_format = ColorFormat::default();
        self.next_set_id = 1;

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear saved palettes: {e:#}");
        }
        info!("Cleared all palettes");
        self.add_color_set();
    }

    /// Current export format preference.
    #[must_use]
    pub const fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    /// Changes the export format preference.
    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.export_format = format;
        self.persist();
    }

    /// Current color value format preference.
    #[must_use]
    pub const fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Changes the color value format preference.
    pub fn set_color_format(&mut self, format: ColorFormat) {
        self.color_format = format;
        self.persist();
    }
}

/// Mirrors an edited bound pair onto the other one through the linear fit.
///
/// Lightness edits always rewrite the contrast bounds. Contrast edits
/// rewrite the lightness bounds only in lightness mode: in contrast mode
/// two explicit lightness bounds would switch the contrast curve off.
/// Edits touching both pairs are kept as given.
fn sync_bounds(update: &ColorSetUpdate, set: &mut ColorSet, mode: CurveMode) {
    let contrast_edited = update.min_contrast.is_some() || update.max_contrast.is_some();
    let lightness_edited = update.min_lightness.is_some() || update.max_lightness.is_some();

    if lightness_edited && !contrast_edited {
        let (min, max) = contrast_bounds_for(
            set.min_lightness.unwrap_or(DEFAULT_MIN_LIGHTNESS),
            set.max_lightness.unwrap_or(DEFAULT_MAX_LIGHTNESS),
        );
        set.min_contrast = Some(round_to(min, 100.0));
        set.max_contrast = Some(round_to(max, 100.0));
    } else if contrast_edited && !lightness_edited && mode == CurveMode::Lightness {
        let (min, max) = lightness_bounds_for(
            set.min_contrast.unwrap_or(DEFAULT_MIN_CONTRAST),
            set.max_contrast.unwrap_or(DEFAULT_MAX_CONTRAST),
        );
        set.min_lightness = Some(round_to(min, 10.0));
        set.max_lightness = Some(round_to(max, 10.0));
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_hsl;
    use crate::models::SnapshotError;
    use crate::services::store::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn seeded() -> (ColorThemer, MemoryStore) {
        let store = MemoryStore::new();
        (ColorThemer::with_seed(store.clone(), 7), store)
    }

    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
            Ok(None)
        }

        fn save(&mut self, _snapshot: &Snapshot) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }

        fn clear(&mut self) -> anyhow::Result<()> {
            anyhow::bail!("read-only")
        }
    }

    #[test]
    fn test_empty_store_starts_with_one_set() {
        let (themer, store) = seeded();
        assert_eq!(themer.color_sets().len(), 1);

        let set = &themer.color_sets()[0];
        assert_eq!(set.id, 1);
        assert_eq!(set.color_count, 11);
        assert_eq!(set.colors.len(), 11);
        assert!(set.colors.contains(&set.base_color));
        assert!(set.generated_name.is_some());
        assert!(store.contents().is_some(), "initial set was not persisted");
    }

    #[test]
    fn test_os_seeded_themer() {
        let themer = ColorThemer::new(MemoryStore::new());
        assert_eq!(themer.color_sets().len(), 1);
        assert_eq!(themer.curve_mode(), CurveMode::Lightness);
    }

    #[test]
    fn test_random_base_color_ranges() {
        let (mut themer, _store) = seeded();
        for _ in 0..20 {
            themer.add_color_set();
        }
        for set in themer.color_sets() {
            let hsl = hex_to_hsl(&set.base_color).unwrap();
            assert!((39.0..=100.5).contains(&hsl.s), "saturation out of range: {hsl:?}");
            assert!((29.0..=71.0).contains(&hsl.l), "lightness out of range: {hsl:?}");
        }
    }

    #[test]
    fn test_seeded_themers_agree() {
        let a = ColorThemer::with_seed(MemoryStore::new(), 42);
        let b = ColorThemer::with_seed(MemoryStore::new(), 42);
        assert_eq!(a.color_sets()[0].base_color, b.color_sets()[0].base_color);
        assert_eq!(a.color_sets()[0].colors, b.color_sets()[0].colors);
    }

    #[test]
    fn test_ids_increase() {
        let (mut themer, _store) = seeded();
        let second = themer.add_color_set();
        let third = themer.add_color_set_with_base("#10B981", Some(5)).unwrap();
        assert_eq!((second, third), (2, 3));
        assert_eq!(themer.color_set(3).unwrap().colors.len(), 5);
    }

    #[test]
    fn test_add_with_invalid_base() {
        let (mut themer, _store) = seeded();
        assert!(matches!(
            themer.add_color_set_with_base("blue", None),
            Err(ThemerError::InvalidColor(_))
        ));
        assert!(matches!(
            themer.add_color_set_with_base("#10B981", Some(0)),
            Err(ThemerError::InvalidColorCount(0))
        ));
        assert_eq!(themer.color_sets().len(), 1);
    }

    #[test]
    fn test_removing_last_set_heals() {
        let (mut themer, _store) = seeded();
        let only = themer.color_sets()[0].id;

        assert!(themer.remove_color_set(only));
        assert_eq!(themer.color_sets().len(), 1);
        assert_ne!(themer.color_sets()[0].id, only);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let (mut themer, _store) = seeded();
        assert!(!themer.remove_color_set(99));
        assert_eq!(themer.color_sets().len(), 1);
    }

    #[test]
    fn test_reorder() {
        let (mut themer, _store) = seeded();
        themer.add_color_set();
        themer.add_color_set();
        let ids = |t: &ColorThemer| t.color_sets().iter().map(|s| s.id).collect::<Vec<_>>();

        assert!(themer.reorder_color_sets(0, 2));
        assert_eq!(ids(&themer), vec![2, 3, 1]);

        assert!(!themer.reorder_color_sets(1, 1));
        assert!(!themer.reorder_color_sets(0, 3));
        assert!(!themer.reorder_color_sets(5, 0));
        assert_eq!(ids(&themer), vec![2, 3, 1]);
    }

    #[test]
    fn test_update_base_color_regenerates() {
        let (mut themer, _store) = seeded();
        let id = themer.color_sets()[0].id;

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    base_color: Some("#3B82F6".to_string()),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        let set = themer.color_set(id).unwrap();
        assert_eq!(set.colors[4], "#3B82F6");
        assert_eq!(set.generated_name.as_deref(), Some("Blue"));
    }

    #[test]
    fn test_update_count_and_name() {
        let (mut themer, _store) = seeded();
        let id = themer.color_sets()[0].id;

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    color_count: Some(7),
                    custom_name: Some("Brand".to_string()),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        let set = themer.color_set(id).unwrap();
        assert_eq!(set.colors.len(), 7);
        assert_eq!(set.display_name(), "Brand");
    }

    #[test]
    fn test_name_only_update_keeps_colors() {
        let (mut themer, _store) = seeded();
        let id = themer.color_sets()[0].id;
        let before = themer.color_set(id).unwrap().colors.clone();

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    custom_name: Some("Renamed".to_string()),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(themer.color_set(id).unwrap().colors, before);
    }

    #[test]
    fn test_invalid_updates_leave_state_untouched() {
        let (mut themer, _store) = seeded();
        let id = themer.color_sets()[0].id;
        let before = themer.color_set(id).unwrap().clone();

        let bad_hex = ColorSetUpdate {
            base_color: Some("#GGGGGG".to_string()),
            ..ColorSetUpdate::default()
        };
        assert!(matches!(
            themer.update_color_set(id, bad_hex),
            Err(ThemerError::InvalidColor(_))
        ));

        let crossed = ColorSetUpdate {
            min_lightness: Some(70.0),
            max_lightness: Some(30.0),
            ..ColorSetUpdate::default()
        };
        assert!(matches!(
            themer.update_color_set(id, crossed),
            Err(ThemerError::InvalidBounds(_))
        ));

        let curve = ColorSetUpdate {
            saturation_curve: Some(150),
            ..ColorSetUpdate::default()
        };
        assert!(matches!(
            themer.update_color_set(id, curve),
            Err(ThemerError::InvalidSaturationCurve(150))
        ));

        assert!(matches!(
            themer.update_color_set(42, ColorSetUpdate::default()),
            Err(ThemerError::UnknownSet(42))
        ));

        assert_eq!(themer.color_set(id).unwrap(), &before);
    }

    #[test]
    fn test_observers_are_notified() {
        let (mut themer, _store) = seeded();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        themer.subscribe(move |sets| {
            assert!(!sets.is_empty());
            seen.set(seen.get() + 1);
        });

        themer.add_color_set();
        themer.reorder_color_sets(0, 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_replace_import_renumbers() {
        let (mut themer, _store) = seeded();
        themer.add_color_set();
        themer.add_color_set();
        assert_eq!(themer.color_sets().len(), 3);

        let summary = themer
            .import_json(
                r##"{"colorSets":[{"baseColor":"#FF0000","customName":"Fire"}]}"##,
                ImportMode::Replace,
            )
            .unwrap();

        assert_eq!(summary, ImportSummary { imported: 1, skipped: 0 });
        assert_eq!(themer.color_sets().len(), 1);

        let set = &themer.color_sets()[0];
        assert_eq!(set.id, 1);
        assert_eq!(set.display_name(), "Fire");
        assert_eq!(set.colors.len(), 11);
        assert!(set.colors.contains(&"#FF0000".to_string()));

        assert_eq!(themer.add_color_set(), 2);
    }

    #[test]
    fn test_merge_import_skips_duplicates() {
        let (mut themer, _store) = seeded();
        let id = themer.add_color_set_with_base("#3B82F6", None).unwrap();
        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    custom_name: Some("Sky".to_string()),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();
        let unnamed = themer.add_color_set_with_base("#10B981", None).unwrap();

        let json = r##"{"colorSets":[
            {"baseColor":"#000000","customName":"Sky"},
            {"baseColor":"#10b981"},
            {"baseColor":"#10B981","customName":"Mint"},
            {"baseColor":"#F59E0B","colorCount":5}
        ]}"##;
        let summary = themer.import_json(json, ImportMode::Merge).unwrap();

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(
            summary.message(),
            "Successfully imported 2 palette(s) (2 duplicate(s) skipped)"
        );

        let ids: Vec<u32> = themer.color_sets().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, id, unnamed, unnamed + 1, unnamed + 2]);
        assert_eq!(themer.color_sets()[4].colors.len(), 5);
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let (mut themer, _store) = seeded();
        let before = themer.color_sets().to_vec();

        assert!(themer.import_json(r#"{"palettes":[]}"#, ImportMode::Replace).is_err());
        assert!(themer
            .import_json(r##"{"colorSets":[{"baseColor":"#FF0000"},{"baseColor":"x"}]}"##, ImportMode::Merge)
            .is_err());
        assert_eq!(themer.color_sets(), before.as_slice());
    }

    #[test]
    fn test_import_regenerates_mismatched_colors() {
        let (mut themer, _store) = seeded();
        let json = r##"{"colorSets":[{"baseColor":"#FF0000","colorCount":5,"colors":["#FF0000"]}]}"##;
        themer.import_json(json, ImportMode::Replace).unwrap();
        assert_eq!(themer.color_sets()[0].colors.len(), 5);
    }

    #[test]
    fn test_export_all_round_trips_through_import() {
        let (mut themer, _store) = seeded();
        themer.add_color_set_with_base("#8B5CF6", Some(9)).unwrap();
        let exported = themer.export_all();

        assert_eq!(exported.version, "1.0");
        let metadata = exported.metadata.clone().unwrap();
        assert_eq!(metadata.total_palettes, 2);
        assert_eq!(metadata.total_colors, 20);

        let json = serde_json::to_string(&exported).unwrap();
        let (mut other, _store) = seeded();
        other.import_json(&json, ImportMode::Replace).unwrap();
        assert_eq!(other.color_sets(), themer.color_sets());
    }

    #[test]
    fn test_snapshot_survives_restart() {
        let store = MemoryStore::new();
        let mut first = ColorThemer::with_seed(store.clone(), 1);
        first.add_color_set_with_base("#3B82F6", None).unwrap();
        first.set_export_format(ExportFormat::Tailwind);
        first.set_color_format(ColorFormat::Hsla);
        let sets = first.color_sets().to_vec();

        let mut second = ColorThemer::with_seed(store, 2);
        assert_eq!(second.color_sets(), sets.as_slice());
        assert_eq!(second.export_format(), ExportFormat::Tailwind);
        assert_eq!(second.color_format(), ColorFormat::Hsla);
        assert_eq!(second.add_color_set(), 3);
    }

    #[test]
    fn test_corrupt_snapshot_resets() {
        let store = MemoryStore::with_contents("{\"colorSets\": oops");
        let themer = ColorThemer::with_seed(store.clone(), 3);
        assert_eq!(themer.color_sets().len(), 1);
        assert_eq!(themer.color_sets()[0].id, 1);
        assert!(store.contents().unwrap().contains("\"colorSets\""));
    }

    #[test]
    fn test_snapshot_with_invalid_base_resets() {
        let store =
            MemoryStore::with_contents(r##"{"colorSets":[{"id":4,"baseColor":"teal"}],"nextSetId":5}"##);
        let themer = ColorThemer::with_seed(store, 3);
        assert_eq!(themer.color_sets().len(), 1);
        assert_eq!(themer.color_sets()[0].id, 1);
    }

    #[test]
    fn test_stale_snapshot_sets_are_regenerated() {
        let store = MemoryStore::with_contents(
            r##"{"colorSets":[{"id":4,"baseColor":"#3B82F6","colorCount":11,"colors":[]}],"nextSetId":2}"##,
        );
        let themer = ColorThemer::with_seed(store, 3);
        let set = &themer.color_sets()[0];
        assert_eq!(set.id, 4);
        assert_eq!(set.colors.len(), 11);
        assert_eq!(set.generated_name.as_deref(), Some("Blue"));
        // counter never hands out an id already in use
        assert_eq!(themer.snapshot().next_set_id, 5);
    }

    #[test]
    fn test_save_failures_are_not_fatal() {
        let mut themer = ColorThemer::with_seed(FailingStore, 9);
        assert_eq!(themer.color_sets().len(), 1);
        themer.add_color_set();
        themer.clear_all_data();
        assert_eq!(themer.color_sets().len(), 1);
    }

    #[test]
    fn test_clear_all_data() {
        let (mut themer, _store) = seeded();
        themer.add_color_set();
        themer.set_export_format(ExportFormat::Json);

        themer.clear_all_data();
        assert_eq!(themer.color_sets().len(), 1);
        assert_eq!(themer.color_sets()[0].id, 1);
        assert_eq!(themer.export_format(), ExportFormat::Css);
    }

    #[test]
    fn test_contrast_update_moves_lightness_bounds() {
        let (mut themer, _store) = seeded();
        let id = themer.add_color_set_with_base("#3B82F6", None).unwrap();
        let before = themer.color_set(id).unwrap().colors.clone();

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    min_contrast: Some(4.0),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        let set = themer.color_set(id).unwrap();
        // 95 - (4 - 1.05) * 90 / 18.45 = 80.6
        assert_eq!(set.max_lightness, Some(80.6));
        assert_eq!(set.min_lightness, Some(5.0));
        assert_eq!(set.min_contrast, Some(4.0));
        assert_ne!(set.colors, before);
        assert!(hex_to_hsl(&set.colors[0]).unwrap().l < 84.0);
    }

    #[test]
    fn test_lightness_update_moves_contrast_bounds() {
        let (mut themer, _store) = seeded();
        let id = themer.color_sets()[0].id;

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    min_lightness: Some(20.0),
                    max_lightness: Some(80.0),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        let set = themer.color_set(id).unwrap();
        let (min, max) = (set.min_contrast.unwrap(), set.max_contrast.unwrap());
        assert!((min - 4.125).abs() < 0.01, "min contrast {min}");
        assert!((max - 16.425).abs() < 0.01, "max contrast {max}");
    }

    #[test]
    fn test_contrast_update_in_contrast_mode_keeps_lightness_unset() {
        let store = MemoryStore::new();
        let mut themer = ColorThemer::with_options(
            store,
            StdRng::seed_from_u64(7),
            CurveMode::Contrast,
            DEFAULT_COLOR_COUNT,
        );
        let id = themer.add_color_set_with_base("#3B82F6", None).unwrap();

        themer
            .update_color_set(
                id,
                ColorSetUpdate {
                    min_contrast: Some(1.5),
                    max_contrast: Some(15.0),
                    ..ColorSetUpdate::default()
                },
            )
            .unwrap();

        let set = themer.color_set(id).unwrap();
        assert_eq!((set.min_lightness, set.max_lightness), (None, None));
        assert!(set.generation_params(CurveMode::Contrast).uses_contrast_curve());
    }

    #[test]
    fn test_snapshot_out_of_range_settings_are_clamped() {
        let store = MemoryStore::with_contents(
            r##"{"colorSets":[
                {"id":1,"baseColor":"#3B82F6","colorCount":0,"colors":[]},
                {"id":2,"baseColor":"#10B981","colorCount":10000,"saturationCurve":500,
                 "minLightness":90,"maxLightness":10}
            ],"nextSetId":3}"##,
        );
        let themer = ColorThemer::with_seed(store, 3);

        let small = themer.color_set(1).unwrap();
        assert_eq!(small.color_count, MIN_COLOR_COUNT);
        assert_eq!(small.colors, vec!["#3B82F6"]);

        let large = themer.color_set(2).unwrap();
        assert_eq!(large.color_count, MAX_COLOR_COUNT);
        assert_eq!(large.colors.len(), MAX_COLOR_COUNT);
        assert_eq!(large.saturation_curve, Some(100));
        assert_eq!((large.min_lightness, large.max_lightness), (None, None));
    }

    #[test]
    fn test_snapshot_with_malformed_shades_is_regenerated() {
        let store = MemoryStore::with_contents(
            r##"{"colorSets":[{"id":1,"baseColor":"#3B82F6","colorCount":3,
                "colors":["#aééb","#aééb","#aééb"]}],"nextSetId":2}"##,
        );
        let mut themer = ColorThemer::with_seed(store, 3);
        let set = themer.color_set(1).unwrap();
        assert!(set.colors.iter().all(|hex| is_valid_hex(hex)));
        assert!(set.colors.contains(&"#3B82F6".to_string()));

        themer.set_color_format(ColorFormat::Rgb);
        assert!(themer.export_color_set(1).is_ok());
    }

    #[test]
    fn test_import_with_malformed_shades_is_rejected() {
        let (mut themer, _store) = seeded();
        let before = themer.color_sets().to_vec();
        let json = r##"{"colorSets":[{"baseColor":"#3B82F6","colorCount":3,"colors":["#aééb","#aééb","#aééb"]}]}"##;

        assert!(matches!(
            themer.import_json(json, ImportMode::Merge),
            Err(ImportError::InvalidShade { index: 0, .. })
        ));
        assert_eq!(themer.color_sets(), before.as_slice());
    }

    #[test]
    fn test_import_with_crossed_bounds_is_rejected() {
        let (mut themer, _store) = seeded();
        let json = r##"{"colorSets":[{"baseColor":"#3B82F6","minLightness":90,"maxLightness":10,"saturationCurve":500}]}"##;

        assert!(themer.import_json(json, ImportMode::Replace).is_err());
        assert_eq!(themer.color_sets().len(), 1);
        assert_eq!(themer.color_sets()[0].id, 1);
    }

    #[test]
    fn test_contrast_mode_regenerates() {
        let (mut themer, _store) = seeded();
        let id = themer.add_color_set_with_base("#3B82F6", None).unwrap();
        let lightness = themer.color_set(id).unwrap().colors.clone();

        themer.set_curve_mode(CurveMode::Contrast);
        let contrast = themer.color_set(id).unwrap().colors.clone();
        assert_ne!(lightness, contrast);
        assert_eq!(contrast[1], "#3B82F6");
    }

    #[test]
    fn test_export_color_set_uses_prefs() {
        let (mut themer, _store) = seeded();
        let id = themer.add_color_set_with_base("#3B82F6", None).unwrap();
        themer.set_color_format(ColorFormat::Rgb);

        let css = themer.export_color_set(id).unwrap();
        assert!(css.contains("--blue-400: rgb(59, 130, 246);"));
        assert!(themer.export_color_set(999).is_err());
    }
}
