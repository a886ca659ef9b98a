use lift_core::{Floor, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiderError {
    #[error("rider origin and destination are both {0}")]
    SameFloor(Floor),

    #[error("manifest row {row}: {message}")]
    Manifest { row: usize, message: String },

    #[error("rider configuration error: {0}")]
    Config(String),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type RiderResult<T> = Result<T, RiderError>;
