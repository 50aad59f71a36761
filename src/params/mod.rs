//! Parameter records
//!
//! The indicator and strategy records are the contract with the external
//! Ichimoku engine. The legacy record is the older flat layout that maps onto
//! them.

mod indicator;
mod legacy;
mod strategy;

pub use indicator::IchimokuParams;
pub use legacy::LegacyIchimokuParams;
pub use strategy::StgParams;

use serde::{Deserialize, Serialize};

use crate::error::PresetResult;

/// Indicator and strategy parameters ready for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParams {
    pub indicator: IchimokuParams,
    pub strategy: StgParams,
}

impl ResolvedParams {
    pub fn validate(&self) -> PresetResult<()> {
        self.indicator.validate()?;
        self.strategy.validate()
    }
}
