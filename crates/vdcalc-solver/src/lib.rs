//! Resistor-pair search engine for vdcalc.
//!
//! Given a catalog of available resistance values, a target goal, and
//! optional bounds, finds the (R1, R2) pair whose achieved divide factor
//! or ratio is closest to the goal.
//!
//! # Example
//!
//! ```
//! use vdcalc_core::{Catalog, Constraints, Goal};
//! use vdcalc_solver::find_best;
//!
//! let catalog: Catalog = [1000.0, 2000.0, 3000.0].into_iter().collect();
//! let goal = Goal::divide_by(2.0).unwrap();
//!
//! let best = find_best(&catalog, goal, &Constraints::new()).unwrap();
//! assert_eq!((best.r1, best.r2), (1000.0, 1000.0));
//! assert_eq!(best.error, 0.0);
//! ```

pub mod error;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use search::{find_best, Solution};
