//! Error type for dial configuration.

use thiserror::Error;

/// Errors raised while building a dial from host configuration.
///
/// Pointer handling itself never fails; every variant here is a caller
/// contract violation caught before the first event is processed.
#[derive(Debug, Error)]
pub enum DialError {
    #[error("Tick step must be a finite value in (0, 360], got {0}")]
    InvalidStep(f64),
    #[error("Tick arc is empty: start and end are both {0}")]
    DegenerateArc(f64),
    #[error("Tick step {step} would generate more than {max} ticks")]
    TooManyTicks { step: f64, max: usize },
    #[error("{name} must be a finite angle in [0, 360], got {value}")]
    AngleOutOfRange { name: &'static str, value: f64 },
    #[error("Dial size must be finite and positive, got {0}")]
    InvalidDialSize(f64),
    #[error("Motion speed must be finite and non-negative, got {0}")]
    InvalidMotionSpeed(f64),
    #[error("Rotation must be finite, got {0}")]
    NonFiniteRotation(f64),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for dial operations.
pub type DialResult<T> = Result<T, DialError>;
