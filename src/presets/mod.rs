//! Preset definitions
//!
//! A preset binds parameter records to a (family, symbol, timeframe) key.
//! Families are alternative, mutually exclusive preset sets: two families may
//! both define EURUSD M30 with different values, and callers pick one.

mod catalog;
mod eurusd;

pub use catalog::{PresetCatalog, PresetFile};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PresetError;
use crate::params::{IchimokuParams, LegacyIchimokuParams, ResolvedParams, StgParams};
use crate::{Symbol, Timeframe};

/// Preset family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetFamily {
    /// Tuned indicator periods with stop-based exits
    Config,
    /// Default indicator periods with limit-based exits
    Sets,
    /// Flat `Ichimoku_*` records
    Legacy,
}

impl PresetFamily {
    pub const ALL: [PresetFamily; 3] = [PresetFamily::Config, PresetFamily::Sets, PresetFamily::Legacy];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetFamily::Config => "config",
            PresetFamily::Sets => "sets",
            PresetFamily::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PresetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PresetFamily {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PresetFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == name)
            .ok_or_else(|| PresetError::InvalidFamily(s.to_string()))
    }
}

/// Unique preset identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetKey {
    pub family: PresetFamily,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
}

impl PresetKey {
    pub fn new(family: PresetFamily, symbol: impl AsRef<str>, timeframe: Timeframe) -> Self {
        Self {
            family,
            symbol: Symbol::new(symbol),
            timeframe,
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.family, self.symbol, self.timeframe)
    }
}

/// Parameter payload of a preset
#[derive(Debug, Clone, PartialEq)]
enum PresetBody {
    Modern(ResolvedParams),
    Legacy(LegacyIchimokuParams),
}

/// A named, immutable parameter set
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "PresetRecord")]
pub struct Preset {
    key: PresetKey,
    body: PresetBody,
}

impl Preset {
    /// Indicator/strategy preset for the `config` or `sets` family
    pub fn modern(
        family: PresetFamily,
        symbol: impl AsRef<str>,
        indicator: IchimokuParams,
        strategy: StgParams,
    ) -> Self {
        Self {
            key: PresetKey::new(family, symbol, indicator.timeframe),
            body: PresetBody::Modern(ResolvedParams {
                indicator,
                strategy,
            }),
        }
    }

    /// Flat preset; symbol and timeframe come from the record itself
    pub fn legacy(params: LegacyIchimokuParams) -> Self {
        Self {
            key: PresetKey {
                family: PresetFamily::Legacy,
                symbol: params.symbol.clone(),
                timeframe: params.tf,
            },
            body: PresetBody::Legacy(params),
        }
    }

    pub fn key(&self) -> &PresetKey {
        &self.key
    }

    /// Parameters in the shape the engine consumes
    pub fn resolve(&self) -> ResolvedParams {
        match &self.body {
            PresetBody::Modern(params) => params.clone(),
            PresetBody::Legacy(legacy) => legacy.to_resolved(),
        }
    }

    /// Legacy record, if this preset is one
    pub fn as_legacy(&self) -> Option<&LegacyIchimokuParams> {
        match &self.body {
            PresetBody::Legacy(legacy) => Some(legacy),
            PresetBody::Modern(_) => None,
        }
    }
}

/// On-disk preset layout
///
/// `indicator` is a partial object: missing fields (including the timeframe)
/// come from the key and the indicator defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetRecord {
    family: PresetFamily,
    symbol: Symbol,
    timeframe: Timeframe,
    #[serde(default)]
    indicator: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    strategy: Option<StgParams>,
    #[serde(default)]
    legacy: Option<LegacyIchimokuParams>,
}

#[derive(Serialize)]
struct PresetRecordRef<'a> {
    family: PresetFamily,
    symbol: &'a Symbol,
    timeframe: Timeframe,
    #[serde(skip_serializing_if = "Option::is_none")]
    indicator: Option<&'a IchimokuParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<&'a StgParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy: Option<&'a LegacyIchimokuParams>,
}

impl TryFrom<PresetRecord> for Preset {
    type Error = PresetError;

    fn try_from(record: PresetRecord) -> Result<Self, Self::Error> {
        let key = PresetKey {
            family: record.family,
            symbol: record.symbol,
            timeframe: record.timeframe,
        };
        let invalid = |reason: &str| PresetError::InvalidPreset {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let body = match key.family {
            PresetFamily::Legacy => {
                if record.indicator.is_some() || record.strategy.is_some() {
                    return Err(invalid("legacy presets take a 'legacy' record only"));
                }
                let legacy = record
                    .legacy
                    .ok_or_else(|| invalid("missing 'legacy' record"))?;
                if legacy.symbol != key.symbol || legacy.tf != key.timeframe {
                    return Err(invalid("legacy record symbol/tf differ from the preset key"));
                }
                PresetBody::Legacy(legacy)
            }
            PresetFamily::Config | PresetFamily::Sets => {
                if record.legacy.is_some() {
                    return Err(invalid("'legacy' record is only allowed in the legacy family"));
                }
                let indicator = match record.indicator {
                    Some(mut fields) => {
                        fields
                            .entry("timeframe")
                            .or_insert_with(|| serde_json::Value::from(key.timeframe.as_str()));
                        serde_json::from_value::<IchimokuParams>(serde_json::Value::Object(fields))?
                    }
                    None => IchimokuParams::defaults(key.timeframe),
                };
                if indicator.timeframe != key.timeframe {
                    return Err(invalid("indicator timeframe differs from the preset key"));
                }
                PresetBody::Modern(ResolvedParams {
                    indicator,
                    strategy: record.strategy.unwrap_or_default(),
                })
            }
        };

        Ok(Preset { key, body })
    }
}

impl Serialize for Preset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (indicator, strategy, legacy) = match &self.body {
            PresetBody::Modern(params) => (Some(&params.indicator), Some(&params.strategy), None),
            PresetBody::Legacy(legacy) => (None, None, Some(legacy)),
        };

        PresetRecordRef {
            family: self.key.family,
            symbol: &self.key.symbol,
            timeframe: self.key.timeframe,
            indicator,
            strategy,
            legacy,
        }
        .serialize(serializer)
    }
}
