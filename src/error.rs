//! Error types for countdown input handling

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    #[error("Unrecognized duration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid time format (expected HH:MM or HH:MM:SS): {0}")]
    InvalidTimeOfDay(String),

    #[error("--time and --duration cannot be used together")]
    ConflictingTargets,
}

pub type Result<T> = std::result::Result<T, CountdownError>;
