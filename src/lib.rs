//! Ichimoku Strategy Presets
//!
//! Per-symbol, per-timeframe default parameters for an Ichimoku-based
//! trading strategy: indicator periods, signal thresholds, stop/limit levels
//! and spread filters. Presets are immutable data grouped into families of
//! mutually exclusive alternatives; a run [`Config`] selects one and layers
//! overrides on top.
//!
//! ```no_run
//! use ichimoku_presets::{PresetCatalog, PresetFamily, Symbol, Timeframe};
//!
//! fn main() -> anyhow::Result<()> {
//!     let preset = PresetCatalog::builtin().lookup(
//!         PresetFamily::Config,
//!         &Symbol::new("EURUSD"),
//!         Timeframe::M30,
//!     )?;
//!     let params = preset.resolve();
//!     println!("tenkan-sen: {}", params.indicator.tenkan_sen);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod presets;
pub mod types;

pub use config::Config;
pub use error::{PresetError, PresetResult};
pub use params::{IchimokuParams, LegacyIchimokuParams, ResolvedParams, StgParams};
pub use presets::{Preset, PresetCatalog, PresetFamily, PresetFile, PresetKey};
pub use types::*;
