//! Error types for vdcalc-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("voltage dividers cannot have gain: divide goal must be >= 1 (got {0})")]
    DivideGoalBelowUnity(f64),

    #[error("voltage dividers cannot invert their input: ratio goal must be positive (got {0})")]
    RatioGoalNotPositive(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
