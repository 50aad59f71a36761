//! Builtin EURUSD presets

use rust_decimal::Decimal;

use super::{Preset, PresetFamily};
use crate::params::{IchimokuParams, LegacyIchimokuParams, StgParams};
use crate::{AppliedPrice, Symbol, Timeframe};

const SYMBOL: &str = "EURUSD";

pub(super) fn presets() -> Vec<Preset> {
    vec![config_m15(), config_m30(), sets_m15(), legacy_m30()]
}

fn config_m15() -> Preset {
    let indicator = IchimokuParams {
        tenkan_sen: 21,
        kijun_sen: 28,
        senkou_span_b: 42,
        shift: 0,
        ..IchimokuParams::defaults(Timeframe::M15)
    };
    let strategy = StgParams {
        lot_size: Decimal::ZERO,
        signal_open_method: 0,
        signal_open_filter: 1,
        signal_open_level: 0.0,
        signal_open_boost: 0,
        signal_close_method: 0,
        signal_close_level: 0.0,
        price_stop_method: 0,
        price_stop_level: 1.0,
        tick_filter_method: 1,
        max_spread: 0.0,
        ..StgParams::default()
    };
    Preset::modern(PresetFamily::Config, SYMBOL, indicator, strategy)
}

fn config_m30() -> Preset {
    let indicator = IchimokuParams {
        tenkan_sen: 5,
        kijun_sen: 26,
        senkou_span_b: 52,
        shift: 0,
        ..IchimokuParams::defaults(Timeframe::M30)
    };
    let strategy = StgParams {
        lot_size: Decimal::ZERO,
        signal_open_method: 0,
        signal_open_filter: 1,
        signal_open_level: 0.0,
        signal_open_boost: 0,
        signal_close_method: 0,
        signal_close_level: 0.0,
        price_stop_method: 0,
        price_stop_level: 2.0,
        tick_filter_method: 1,
        max_spread: 0.0,
        ..StgParams::default()
    };
    Preset::modern(PresetFamily::Config, SYMBOL, indicator, strategy)
}

fn sets_m15() -> Preset {
    let indicator = IchimokuParams {
        shift: 0,
        ..IchimokuParams::defaults(Timeframe::M15)
    };
    let strategy = StgParams {
        lot_size: Decimal::ZERO,
        signal_open_method: 0,
        signal_open_filter: 1,
        signal_open_level: 0.0,
        signal_open_boost: 0,
        signal_close_method: 0,
        signal_close_level: 0.0,
        price_limit_method: 0,
        price_limit_level: 2.0,
        tick_filter_method: 1,
        max_spread: 0.0,
        ..StgParams::default()
    };
    Preset::modern(PresetFamily::Sets, SYMBOL, indicator, strategy)
}

fn legacy_m30() -> Preset {
    Preset::legacy(LegacyIchimokuParams {
        symbol: Symbol::new(SYMBOL),
        tf: Timeframe::M30,
        period: 2,
        applied_price: AppliedPrice::Low,
        shift: 0,
        signal_open_method: 0,
        signal_open_level: 36.0,
        signal_close_method: 1,
        signal_close_level: 36.0,
        price_limit_method: 0,
        price_limit_level: 0.0,
        max_spread: 5.0,
    })
}
