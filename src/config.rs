//! Run configuration
//!
//! Selects one preset and layers partial overrides on top of it. Loaded from
//! JSON, with environment variable overrides for the sizing knobs.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::params::{IchimokuParams, ResolvedParams, StgParams};
use crate::presets::{PresetCatalog, PresetFamily};
use crate::{Symbol, Timeframe};

pub const ENV_LOT_SIZE: &str = "ICHIMOKU_LOT_SIZE";
pub const ENV_MAX_SPREAD: &str = "ICHIMOKU_MAX_SPREAD";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_family")]
    pub family: PresetFamily,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    /// Extra preset files merged over the builtin catalog, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preset_files: Vec<PathBuf>,
    /// Indicator fields replacing the preset's values
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub indicator: Map<String, Value>,
    /// Strategy fields replacing the preset's values
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub strategy: Map<String, Value>,
}

fn default_family() -> PresetFamily {
    PresetFamily::Config
}

impl Config {
    /// Configuration selecting a preset with no overrides
    pub fn new(family: PresetFamily, symbol: impl AsRef<str>, timeframe: Timeframe) -> Self {
        Config {
            family,
            symbol: Symbol::new(symbol),
            timeframe,
            preset_files: Vec::new(),
            indicator: Map::new(),
            strategy: Map::new(),
        }
    }

    /// Load configuration from JSON file
    ///
    /// Relative `preset_files` entries are resolved against the config
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_env(path, |name| std::env::var(name).ok())
    }

    /// Load configuration from JSON file, reading overrides through `lookup`
    pub fn from_file_with_env<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;

        if let Some(base) = path.parent() {
            for preset_file in &mut config.preset_files {
                if preset_file.is_relative() {
                    *preset_file = base.join(&*preset_file);
                }
            }
        }

        config.apply_env_overrides(lookup)?;

        Ok(config)
    }

    /// Apply `ICHIMOKU_LOT_SIZE` / `ICHIMOKU_MAX_SPREAD` using the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LOT_SIZE) {
            let lot_size: Decimal = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a decimal: {:?}", ENV_LOT_SIZE, raw))?;
            debug!(%lot_size, "Lot size overridden from environment");
            self.strategy
                .insert("lot_size".to_string(), Value::String(lot_size.to_string()));
        }

        if let Some(raw) = lookup(ENV_MAX_SPREAD) {
            let max_spread: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {:?}", ENV_MAX_SPREAD, raw))?;
            debug!(max_spread, "Max spread overridden from environment");
            self.strategy
                .insert("max_spread".to_string(), Value::from(max_spread));
        }

        Ok(())
    }

    /// Builtin presets plus the configured preset files
    pub fn catalog(&self) -> Result<PresetCatalog> {
        let mut catalog = PresetCatalog::builtin().clone();
        for path in &self.preset_files {
            catalog
                .extend_from_file(path)
                .with_context(|| format!("Failed to load preset file {}", path.display()))?;
        }
        Ok(catalog)
    }

    /// Selected preset with overrides applied and validated
    pub fn resolve(&self, catalog: &PresetCatalog) -> Result<ResolvedParams> {
        let preset = catalog.lookup(self.family, &self.symbol, self.timeframe)?;
        let base = preset.resolve();

        let indicator: IchimokuParams = apply_overrides(&base.indicator, &self.indicator)
            .context("Invalid indicator override")?;
        if indicator.timeframe != self.timeframe {
            bail!(
                "Indicator timeframe override {} differs from the selected preset timeframe {}",
                indicator.timeframe,
                self.timeframe
            );
        }
        let strategy: StgParams =
            apply_overrides(&base.strategy, &self.strategy).context("Invalid strategy override")?;

        let resolved = ResolvedParams {
            indicator,
            strategy,
        };
        resolved
            .validate()
            .with_context(|| format!("Preset {} failed validation", preset.key()))?;

        info!(
            preset = %preset.key(),
            indicator_overrides = self.indicator.len(),
            strategy_overrides = self.strategy.len(),
            "Resolved preset"
        );
        Ok(resolved)
    }
}

/// Replace top-level fields of `base` with `overrides`
fn apply_overrides<T>(base: &T, overrides: &Map<String, Value>) -> Result<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut value = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut value {
        for (name, override_value) in overrides {
            fields.insert(name.clone(), override_value.clone());
        }
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_family_defaults_to_config() {
        let config: Config =
            serde_json::from_str(r#"{"symbol": "EURUSD", "timeframe": "M30"}"#).unwrap();
        assert_eq!(config.family, PresetFamily::Config);
        assert!(config.preset_files.is_empty());
    }

    #[test]
    fn test_resolve_without_overrides_matches_preset() {
        let config = Config::new(PresetFamily::Config, "EURUSD", Timeframe::M30);
        let resolved = config.resolve(PresetCatalog::builtin()).unwrap();
        assert_eq!(resolved.indicator.tenkan_sen, 5);
        assert_eq!(resolved.strategy.price_stop_level, 2.0);
    }

    #[test]
    fn test_overrides_layer_over_preset() {
        let config: Config = serde_json::from_str(
            r#"{"family": "config", "symbol": "EURUSD", "timeframe": "M15",
                "indicator": {"tenkan_sen": 7},
                "strategy": {"max_spread": 3.5, "signal_open_level": 1}}"#,
        )
        .unwrap();

        let resolved = config.resolve(PresetCatalog::builtin()).unwrap();
        assert_eq!(resolved.indicator.tenkan_sen, 7);
        assert_eq!(resolved.indicator.kijun_sen, 28);
        assert_eq!(resolved.strategy.max_spread, 3.5);
        assert_eq!(resolved.strategy.signal_open_level, 1.0);
        assert_eq!(resolved.strategy.price_stop_level, 1.0);
    }

    #[test]
    fn test_unknown_override_rejected() {
        let mut config = Config::new(PresetFamily::Config, "EURUSD", Timeframe::M30);
        config
            .strategy
            .insert("take_profit".to_string(), Value::from(10));
        assert!(config.resolve(PresetCatalog::builtin()).is_err());
    }

    #[test]
    fn test_zero_period_override_rejected() {
        let mut config = Config::new(PresetFamily::Config, "EURUSD", Timeframe::M30);
        config.indicator.insert("kijun_sen".to_string(), Value::from(0));
        let err = config.resolve(PresetCatalog::builtin()).unwrap_err();
        assert!(format!("{:#}", err).contains("kijun_sen"));
    }

    #[test]
    fn test_timeframe_override_rejected() {
        let mut config = Config::new(PresetFamily::Config, "EURUSD", Timeframe::M30);
        config
            .indicator
            .insert("timeframe".to_string(), Value::from("H1"));
        assert!(config.resolve(PresetCatalog::builtin()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::new(PresetFamily::Legacy, "EURUSD", Timeframe::M30);
        config
            .apply_env_overrides(env(&[
                (ENV_LOT_SIZE, "0.05"),
                (ENV_MAX_SPREAD, "2.5"),
            ]))
            .unwrap();

        let resolved = config.resolve(PresetCatalog::builtin()).unwrap();
        assert_eq!(resolved.strategy.lot_size, dec!(0.05));
        assert_eq!(resolved.strategy.max_spread, 2.5);
        assert_eq!(resolved.strategy.signal_open_level, 36.0);
    }

    #[test]
    fn test_bad_env_value() {
        let mut config = Config::new(PresetFamily::Config, "EURUSD", Timeframe::M30);
        assert!(config
            .apply_env_overrides(env(&[(ENV_MAX_SPREAD, "wide")]))
            .is_err());
    }
}
