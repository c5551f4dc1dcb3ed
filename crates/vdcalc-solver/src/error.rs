//! Error types for vdcalc-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no admissible resistor pair found (empty catalog or unsatisfiable constraints)")]
    NoSolution,
}

pub type Result<T> = std::result::Result<T, Error>;
