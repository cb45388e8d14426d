use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
