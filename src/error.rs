use thiserror::Error;

/// Reasons a spin refuses to start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpinError {
    #[error("Please enter at least one prize")]
    NoPrizes,
    #[error("a spin is already in progress")]
    AlreadySpinning,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum WinRateError {
    #[error("win rate must be a number, got {0:?}")]
    NotANumber(String),
    #[error("win rate must be between 0 and 100, got {0}")]
    OutOfRange(f64),
}
