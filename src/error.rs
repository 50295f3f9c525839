//! Error types for input validation and scenario loading

use thiserror::Error;

/// Errors raised by strict projections and the scenario loader
///
/// The permissive projection path never produces these; they only surface
/// when validation is requested or when reading scenario files.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("years cannot be negative, got {0}")]
    NegativeYears(i64),

    #[error("years cannot exceed {max}, got {0}", max = crate::inputs::MAX_PROJECTION_YEARS)]
    HorizonTooLong(i64),

    #[error("annual rate must be greater than -1.0, got {0}")]
    RateBelowFloor(f64),

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
