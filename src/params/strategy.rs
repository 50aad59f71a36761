//! Strategy parameters consumed by the trading engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PresetError, PresetResult};

/// Strategy configuration for one symbol/timeframe
///
/// Method fields are selectors interpreted by the engine; level fields are
/// the thresholds those methods compare against. Omitted fields take the
/// values from [`StgParams::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StgParams {
    /// Position size; 0 lets the engine size the trade
    pub lot_size: Decimal,
    pub signal_open_method: i32,
    /// Entry filter selector (default: 1)
    pub signal_open_filter: i32,
    pub signal_open_level: f32,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: f32,
    /// Stop-loss price method
    pub price_stop_method: i32,
    pub price_stop_level: f32,
    /// Take-profit price method
    pub price_limit_method: i32,
    pub price_limit_level: f32,
    /// Tick filter selector (default: 1)
    pub tick_filter_method: i32,
    /// Maximum spread allowed for entries; 0 disables the filter
    pub max_spread: f32,
}

impl Default for StgParams {
    fn default() -> Self {
        StgParams {
            lot_size: Decimal::ZERO,
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: 0.0,
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: 0.0,
            price_stop_method: 0,
            price_stop_level: 0.0,
            price_limit_method: 0,
            price_limit_level: 0.0,
            tick_filter_method: 1,
            max_spread: 0.0,
        }
    }
}

impl StgParams {
    /// Reject values no engine can act on: non-finite levels and negative
    /// sizes or spreads. Methods are not cross-checked against levels.
    pub fn validate(&self) -> PresetResult<()> {
        if self.lot_size < Decimal::ZERO {
            return Err(PresetError::InvalidLevel {
                field: "lot_size",
                value: self.lot_size.to_string(),
            });
        }

        for (field, value) in [
            ("signal_open_level", self.signal_open_level),
            ("signal_close_level", self.signal_close_level),
            ("price_stop_level", self.price_stop_level),
            ("price_limit_level", self.price_limit_level),
        ] {
            if !value.is_finite() {
                return Err(PresetError::InvalidLevel {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if !self.max_spread.is_finite() || self.max_spread < 0.0 {
            return Err(PresetError::InvalidLevel {
                field: "max_spread",
                value: self.max_spread.to_string(),
            });
        }

        Ok(())
    }

    /// Whether entries are gated on spread
    pub fn has_spread_filter(&self) -> bool {
        self.max_spread > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let params = StgParams::default();
        assert_eq!(params.lot_size, Decimal::ZERO);
        assert_eq!(params.signal_open_filter, 1);
        assert_eq!(params.tick_filter_method, 1);
        assert_eq!(params.max_spread, 0.0);
        assert!(!params.has_spread_filter());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: StgParams =
            serde_json::from_str(r#"{"price_stop_level": 2.0, "max_spread": 4}"#).unwrap();
        assert_eq!(params.price_stop_level, 2.0);
        assert_eq!(params.max_spread, 4.0);
        assert_eq!(params.signal_open_filter, 1);
        assert!(params.has_spread_filter());
    }

    #[test]
    fn test_lot_size_accepts_number_or_string() {
        let a: StgParams = serde_json::from_str(r#"{"lot_size": 0.1}"#).unwrap();
        let b: StgParams = serde_json::from_str(r#"{"lot_size": "0.1"}"#).unwrap();
        assert_eq!(a.lot_size, dec!(0.1));
        assert_eq!(b.lot_size, dec!(0.1));
    }

    #[test]
    fn test_negative_values_rejected() {
        let params = StgParams {
            lot_size: dec!(-0.01),
            ..StgParams::default()
        };
        assert!(params.validate().is_err());

        let params = StgParams {
            max_spread: -1.0,
            ..StgParams::default()
        };
        assert!(params.validate().is_err());

        let params = StgParams {
            signal_open_level: f32::NAN,
            ..StgParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PresetError::InvalidLevel { field: "signal_open_level", .. })
        ));
    }
}
