//! Ichimoku indicator parameters

use serde::{Deserialize, Serialize};

use crate::error::{PresetError, PresetResult};
use crate::{AppliedPrice, Timeframe};

/// Ichimoku Kinko Hyo indicator configuration
///
/// Omitted fields deserialize to the base defaults (9/26/52, no shift,
/// close price); only the timeframe is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IchimokuParams {
    /// Timeframe the indicator is calculated on
    pub timeframe: Timeframe,

    /// Price series (default: close)
    #[serde(default)]
    pub applied_price: AppliedPrice,

    /// Bar offset the values are read at (default: 0)
    #[serde(default)]
    pub shift: u32,

    /// Conversion line period (default: 9)
    #[serde(default = "default_tenkan_sen")]
    pub tenkan_sen: u32,

    /// Base line period (default: 26)
    #[serde(default = "default_kijun_sen")]
    pub kijun_sen: u32,

    /// Leading span B period (default: 52)
    #[serde(default = "default_senkou_span_b")]
    pub senkou_span_b: u32,
}

fn default_tenkan_sen() -> u32 {
    9
}
fn default_kijun_sen() -> u32 {
    26
}
fn default_senkou_span_b() -> u32 {
    52
}

impl IchimokuParams {
    /// Base defaults every indicator preset starts from
    pub fn defaults(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            applied_price: AppliedPrice::default(),
            shift: 0,
            tenkan_sen: default_tenkan_sen(),
            kijun_sen: default_kijun_sen(),
            senkou_span_b: default_senkou_span_b(),
        }
    }

    /// Check that every period is positive
    pub fn validate(&self) -> PresetResult<()> {
        for (field, value) in [
            ("tenkan_sen", self.tenkan_sen),
            ("kijun_sen", self.kijun_sen),
            ("senkou_span_b", self.senkou_span_b),
        ] {
            if value == 0 {
                return Err(PresetError::InvalidPeriod { field, value });
            }
        }
        Ok(())
    }

    /// Longest lookback needed before all lines are defined.
    /// Saturates at `u32::MAX`.
    pub fn warmup_bars(&self) -> u32 {
        self.tenkan_sen
            .max(self.kijun_sen)
            .max(self.senkou_span_b)
            .saturating_add(self.shift)
    }
}
