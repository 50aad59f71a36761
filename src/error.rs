//! Preset error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("unknown preset '{key}'. Available: {available}")]
    UnknownPreset { key: String, available: String },

    #[error("duplicate preset '{0}'")]
    DuplicatePreset(String),

    #[error("invalid preset '{key}': {reason}")]
    InvalidPreset { key: String, reason: String },

    #[error("invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("invalid applied price code: {0}")]
    InvalidAppliedPrice(i32),

    #[error("invalid preset family: {0}")]
    InvalidFamily(String),

    #[error("{field} must be a positive period, got {value}")]
    InvalidPeriod { field: &'static str, value: u32 },

    #[error("{field} is out of range: {value}")]
    InvalidLevel { field: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PresetResult<T> = Result<T, PresetError>;
