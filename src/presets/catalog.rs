//! Preset catalog
//!
//! The builtin catalog is built once and shared read-only. Catalogs that
//! include user preset files are separate owned values.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use super::{eurusd, Preset, PresetFamily, PresetKey};
use crate::error::{PresetError, PresetResult};
use crate::{Symbol, Timeframe};

static BUILTIN: OnceLock<PresetCatalog> = OnceLock::new();

/// JSON preset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// Presets ordered by family, symbol, then timeframe
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: BTreeMap<PresetKey, Preset>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the presets shipped with the crate
    pub fn builtin() -> &'static PresetCatalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = PresetCatalog::new();
            for preset in eurusd::presets() {
                catalog.insert(preset);
            }
            debug!(presets = catalog.len(), "Builtin preset catalog initialized");
            catalog
        })
    }

    /// Add a preset, returning the one it replaced
    pub fn insert(&mut self, preset: Preset) -> Option<Preset> {
        let key = preset.key().clone();
        let previous = self.presets.insert(key.clone(), preset);
        if previous.is_some() {
            warn!(preset = %key, "Preset replaced");
        }
        previous
    }

    pub fn get(&self, key: &PresetKey) -> Option<&Preset> {
        self.presets.get(key)
    }

    /// Look up a preset, listing the available keys on a miss
    pub fn lookup(
        &self,
        family: PresetFamily,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> PresetResult<&Preset> {
        let key = PresetKey {
            family,
            symbol: symbol.clone(),
            timeframe,
        };
        self.presets
            .get(&key)
            .ok_or_else(|| PresetError::UnknownPreset {
                key: key.to_string(),
                available: self.presets.keys().join(", "),
            })
    }

    /// Every family's preset for a symbol/timeframe
    pub fn find(&self, symbol: &Symbol, timeframe: Timeframe) -> Vec<&Preset> {
        self.presets
            .values()
            .filter(|p| &p.key().symbol == symbol && p.key().timeframe == timeframe)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Families present in the catalog
    pub fn families(&self) -> Vec<PresetFamily> {
        self.presets.keys().map(|k| k.family).dedup().collect()
    }

    /// Distinct symbols, sorted
    pub fn symbols(&self) -> Vec<Symbol> {
        self.presets
            .keys()
            .map(|k| k.symbol.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// Load a catalog from a JSON preset file
    ///
    /// Every preset is validated. Two presets with the same key in one file
    /// are rejected rather than silently replaced.
    pub fn load_file(path: impl AsRef<Path>) -> PresetResult<PresetCatalog> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let file: PresetFile = serde_json::from_str(&contents)?;

        let mut presets = BTreeMap::new();
        for preset in file.presets {
            preset.resolve().validate()?;
            match presets.entry(preset.key().clone()) {
                Entry::Occupied(entry) => {
                    return Err(PresetError::DuplicatePreset(entry.key().to_string()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(preset);
                }
            }
        }

        info!(path = %path.display(), presets = presets.len(), "Loaded preset file");
        Ok(PresetCatalog { presets })
    }

    /// Merge a preset file into this catalog; file presets win on conflicts.
    /// Returns the number of presets loaded.
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> PresetResult<usize> {
        let loaded = Self::load_file(path)?;
        let count = loaded.len();
        for preset in loaded.presets.into_values() {
            self.insert(preset);
        }
        Ok(count)
    }

    pub fn to_preset_file(&self) -> PresetFile {
        PresetFile {
            presets: self.presets.values().cloned().collect(),
        }
    }
}
