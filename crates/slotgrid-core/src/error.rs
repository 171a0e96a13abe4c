//! Error types for slotgrid-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid weekly rule: {0}")]
    InvalidRule(String),

    #[error("Invalid date override: {0}")]
    InvalidOverride(String),

    #[error("Invalid generation params: {0}")]
    InvalidParams(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unknown calendar provider: {0}")]
    UnknownProvider(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
