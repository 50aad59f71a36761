//! Core value types shared by presets and parameter records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PresetError;

/// Trading symbol (e.g., "EURUSD")
///
/// Symbols are cloned into every preset key. Using Arc<str> instead of String
/// keeps clones O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(#[serde(with = "arc_str_serde")] std::sync::Arc<str>);

/// Custom serde for Arc<str>
mod arc_str_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::sync::Arc;

    pub fn serialize<S>(value: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Arc::from(s.as_str()))
    }
}

impl Symbol {
    pub fn new(s: impl AsRef<str>) -> Self {
        Symbol(std::sync::Arc::from(s.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chart timeframe
///
/// Serialized by its short name ("M30"). Parsing also accepts the
/// platform constant form ("PERIOD_M30") and the compact form ("30m").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 9] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    /// Bar length in minutes (a month counts as 30 days)
    pub fn minutes(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M5 => 5,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H4 => 240,
            Timeframe::D1 => 1_440,
            Timeframe::W1 => 10_080,
            Timeframe::MN1 => 43_200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H4 => "H4",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::MN1 => "MN1",
        }
    }

    /// Platform period code. Minute timeframes use their length in minutes,
    /// hour and larger timeframes use flag-encoded values.
    pub fn mql_code(self) -> i32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M5 => 5,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 16_385,
            Timeframe::H4 => 16_388,
            Timeframe::D1 => 16_408,
            Timeframe::W1 => 32_769,
            Timeframe::MN1 => 49_153,
        }
    }

    pub fn from_mql_code(code: i32) -> Result<Self, PresetError> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.mql_code() == code)
            .ok_or_else(|| PresetError::InvalidTimeframe(code.to_string()))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("PERIOD_").unwrap_or(&upper);

        let tf = match name {
            "M1" | "1M" => Timeframe::M1,
            "M5" | "5M" => Timeframe::M5,
            "M15" | "15M" => Timeframe::M15,
            "M30" | "30M" => Timeframe::M30,
            "H1" | "1H" => Timeframe::H1,
            "H4" | "4H" => Timeframe::H4,
            "D1" | "1D" => Timeframe::D1,
            "W1" | "1W" => Timeframe::W1,
            "MN1" | "MN" => Timeframe::MN1,
            _ => return Err(PresetError::InvalidTimeframe(s.to_string())),
        };
        Ok(tf)
    }
}

impl TryFrom<String> for Timeframe {
    type Error = PresetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.as_str().to_string()
    }
}

/// Price series the indicator is applied to
///
/// Serialized as its platform integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AppliedPrice {
    #[default]
    Close,
    Open,
    High,
    Low,
    /// (high + low) / 2
    Median,
    /// (high + low + close) / 3
    Typical,
    /// (high + low + 2 * close) / 4
    Weighted,
}

impl AppliedPrice {
    pub fn code(self) -> i32 {
        match self {
            AppliedPrice::Close => 0,
            AppliedPrice::Open => 1,
            AppliedPrice::High => 2,
            AppliedPrice::Low => 3,
            AppliedPrice::Median => 4,
            AppliedPrice::Typical => 5,
            AppliedPrice::Weighted => 6,
        }
    }
}

impl TryFrom<i32> for AppliedPrice {
    type Error = PresetError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let price = match code {
            0 => AppliedPrice::Close,
            1 => AppliedPrice::Open,
            2 => AppliedPrice::High,
            3 => AppliedPrice::Low,
            4 => AppliedPrice::Median,
            5 => AppliedPrice::Typical,
            6 => AppliedPrice::Weighted,
            other => return Err(PresetError::InvalidAppliedPrice(other)),
        };
        Ok(price)
    }
}

impl From<AppliedPrice> for i32 {
    fn from(price: AppliedPrice) -> Self {
        price.code()
    }
}

impl fmt::Display for AppliedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppliedPrice::Close => "close",
            AppliedPrice::Open => "open",
            AppliedPrice::High => "high",
            AppliedPrice::Low => "low",
            AppliedPrice::Median => "median",
            AppliedPrice::Typical => "typical",
            AppliedPrice::Weighted => "weighted",
        };
        f.write_str(name)
    }
}
