//! Flat legacy preset record
//!
//! Older presets carried the symbol and timeframe inside the record and used
//! `Ichimoku_`-prefixed field names. The wire names are kept so those files
//! load unchanged.

use serde::{Deserialize, Serialize};

use super::{IchimokuParams, ResolvedParams, StgParams};
use crate::{AppliedPrice, Symbol, Timeframe};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyIchimokuParams {
    pub symbol: Symbol,
    pub tf: Timeframe,
    /// Kept for fidelity; nothing in the modern records consumes it
    #[serde(rename = "Ichimoku_Period")]
    pub period: i32,
    #[serde(rename = "Ichimoku_Applied_Price")]
    pub applied_price: AppliedPrice,
    #[serde(rename = "Ichimoku_Shift")]
    pub shift: u32,
    #[serde(rename = "Ichimoku_SignalOpenMethod")]
    pub signal_open_method: i32,
    #[serde(rename = "Ichimoku_SignalOpenLevel")]
    pub signal_open_level: f32,
    #[serde(rename = "Ichimoku_SignalCloseMethod")]
    pub signal_close_method: i32,
    #[serde(rename = "Ichimoku_SignalCloseLevel")]
    pub signal_close_level: f32,
    #[serde(rename = "Ichimoku_PriceLimitMethod")]
    pub price_limit_method: i32,
    #[serde(rename = "Ichimoku_PriceLimitLevel")]
    pub price_limit_level: f32,
    #[serde(rename = "Ichimoku_MaxSpread")]
    pub max_spread: f32,
}

impl LegacyIchimokuParams {
    /// Map onto the indicator/strategy pair. Indicator periods keep the
    /// base defaults since the flat record never carried them.
    pub fn to_resolved(&self) -> ResolvedParams {
        let indicator = IchimokuParams {
            applied_price: self.applied_price,
            shift: self.shift,
            ..IchimokuParams::defaults(self.tf)
        };

        let strategy = StgParams {
            signal_open_method: self.signal_open_method,
            signal_open_level: self.signal_open_level,
            signal_close_method: self.signal_close_method,
            signal_close_level: self.signal_close_level,
            price_limit_method: self.price_limit_method,
            price_limit_level: self.price_limit_level,
            max_spread: self.max_spread,
            ..StgParams::default()
        };

        ResolvedParams {
            indicator,
            strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "symbol": "GBPUSD",
        "tf": "PERIOD_H1",
        "Ichimoku_Period": 1,
        "Ichimoku_Applied_Price": 0,
        "Ichimoku_Shift": 1,
        "Ichimoku_SignalOpenMethod": 2,
        "Ichimoku_SignalOpenLevel": 10,
        "Ichimoku_SignalCloseMethod": 3,
        "Ichimoku_SignalCloseLevel": 12,
        "Ichimoku_PriceLimitMethod": 1,
        "Ichimoku_PriceLimitLevel": 4,
        "Ichimoku_MaxSpread": 2
    }"#;

    #[test]
    fn test_parse_wire_names() {
        let legacy: LegacyIchimokuParams = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(legacy.symbol, Symbol::new("GBPUSD"));
        assert_eq!(legacy.tf, Timeframe::H1);
        assert_eq!(legacy.signal_open_level, 10.0);
        assert_eq!(legacy.max_spread, 2.0);

        let json = serde_json::to_value(&legacy).unwrap();
        assert_eq!(json["Ichimoku_SignalCloseMethod"], 3);
        assert_eq!(json["tf"], "H1");
    }

    #[test]
    fn test_to_resolved() {
        let legacy: LegacyIchimokuParams = serde_json::from_str(SAMPLE).unwrap();
        let resolved = legacy.to_resolved();

        assert_eq!(resolved.indicator.timeframe, Timeframe::H1);
        assert_eq!(resolved.indicator.shift, 1);
        assert_eq!(resolved.indicator.tenkan_sen, 9);
        assert_eq!(resolved.strategy.signal_open_method, 2);
        assert_eq!(resolved.strategy.signal_close_level, 12.0);
        assert_eq!(resolved.strategy.price_limit_level, 4.0);
        assert_eq!(resolved.strategy.price_stop_level, 0.0);
        assert_eq!(resolved.strategy.signal_open_filter, 1);
        assert!(resolved.validate().is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_str::<LegacyIchimokuParams>(r#"{"symbol": "EURUSD"}"#);
        assert!(result.is_err());
    }
}
