//! Core types for the vdcalc voltage-divider calculator.
//!
//! This crate provides the fundamental data for the resistor-pair search:
//! the value catalog, the target goal (divide factor or direct ratio), the
//! optional bounds on R1, R2, and their sum, and the engineering-unit
//! parsing and formatting for resistance values.

pub mod catalog;
pub mod constraint;
pub mod error;
pub mod goal;
pub mod series;
pub mod units;

pub use catalog::Catalog;
pub use constraint::Constraints;
pub use error::{Error, Result};
pub use goal::Goal;
pub use series::Series;
pub use units::{format_resistance, parse_resistance};
