//! The pair search.

use vdcalc_core::{Catalog, Constraints, Goal};

use crate::error::{Error, Result};

/// The best admissible pair found by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Upper resistor value, in ohms.
    pub r1: f64,
    /// Lower resistor value, in ohms.
    pub r2: f64,
    /// The goal the search was scored against.
    pub goal: Goal,
    /// The divide factor or ratio this pair actually achieves.
    pub achieved: f64,
    /// Absolute difference between achieved value and goal.
    pub error: f64,
}

impl Solution {
    /// Total series resistance R1 + R2.
    pub fn sum(&self) -> f64 {
        self.r1 + self.r2
    }

    /// Signed error of the achieved value relative to the goal, in percent.
    pub fn percent_error(&self) -> f64 {
        (self.achieved - self.goal.value()) * 100.0 / self.goal.value()
    }
}

/// Find the admissible (R1, R2) pair closest to the goal.
///
/// Enumerates the full cross product of the catalog against itself,
/// skipping pairs that violate a bound, and folds the minimum-error pair.
/// The catalog iterates in ascending order, so when several pairs achieve
/// the same error the first one in that order wins, deterministically.
///
/// A pair with R2 = 0 scores a non-finite error and can never win.
/// Returns [`Error::NoSolution`] when no admissible pair exists, whether
/// the catalog was empty, the constraints filtered everything out, or
/// every candidate scored non-finite.
pub fn find_best(catalog: &Catalog, goal: Goal, constraints: &Constraints) -> Result<Solution> {
    let mut best: Option<Solution> = None;

    for r1 in catalog.iter() {
        for r2 in catalog.iter() {
            if !constraints.admits(r1, r2) {
                continue;
            }

            let achieved = goal.achieved(r1, r2);
            let error = (achieved - goal.value()).abs();
            if !error.is_finite() {
                continue;
            }

            if best.as_ref().map_or(true, |b| error < b.error) {
                best = Some(Solution {
                    r1,
                    r2,
                    goal,
                    achieved,
                    error,
                });
            }
        }
    }

    best.ok_or(Error::NoSolution)
}
