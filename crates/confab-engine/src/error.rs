use chrono::{DateTime, Utc};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid window: end {end} is not after start {start}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid slot duration: {0} minutes")]
    InvalidSlotDuration(u32),

    #[error("Local time does not exist (DST gap): {0}")]
    NonExistentLocalTime(String),

    #[error("Recurrence rule error: {0}")]
    Recurrence(String),

    #[error(transparent)]
    Core(#[from] confab_core::error::CoreError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
