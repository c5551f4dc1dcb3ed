//! The target relationship between R1 and R2.

use crate::error::{Error, Result};

/// The goal of a divider search: either a division factor or a direct
/// resistance ratio.
///
/// Goals are validated at construction, so a `Goal` held by the search is
/// always numerically usable (finite, non-zero denominator in the percent
/// error formula).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Goal {
    /// Target division factor (R1 + R2) / R2. Always >= 1.
    DivideBy(f64),
    /// Target ratio R1 / R2. Always > 0.
    RatioTo(f64),
}

impl Goal {
    /// Target a division factor of `goal`.
    ///
    /// A passive divider cannot have gain, so `goal` must be at least 1.
    pub fn divide_by(goal: f64) -> Result<Self> {
        if !(goal >= 1.0) {
            return Err(Error::DivideGoalBelowUnity(goal));
        }
        Ok(Goal::DivideBy(goal))
    }

    /// Target a ratio R1 = `goal` * R2.
    ///
    /// A divider cannot invert its input, so `goal` must be positive.
    pub fn ratio_to(goal: f64) -> Result<Self> {
        if !(goal > 0.0) {
            return Err(Error::RatioGoalNotPositive(goal));
        }
        Ok(Goal::RatioTo(goal))
    }

    /// The numeric goal value.
    pub fn value(&self) -> f64 {
        match *self {
            Goal::DivideBy(goal) | Goal::RatioTo(goal) => goal,
        }
    }

    /// The value a candidate pair actually achieves under this goal.
    pub fn achieved(&self, r1: f64, r2: f64) -> f64 {
        match self {
            Goal::DivideBy(_) => (r1 + r2) / r2,
            Goal::RatioTo(_) => r1 / r2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_validation() {
        assert!(Goal::divide_by(1.0).is_ok());
        assert!(Goal::divide_by(3.3).is_ok());
        assert!(matches!(
            Goal::divide_by(0.5),
            Err(Error::DivideGoalBelowUnity(_))
        ));
        assert!(Goal::divide_by(f64::NAN).is_err());
    }

    #[test]
    fn test_ratio_to_validation() {
        assert!(Goal::ratio_to(0.1).is_ok());
        assert!(matches!(
            Goal::ratio_to(0.0),
            Err(Error::RatioGoalNotPositive(_))
        ));
        assert!(Goal::ratio_to(-2.0).is_err());
        assert!(Goal::ratio_to(f64::NAN).is_err());
    }

    #[test]
    fn test_achieved_formulas() {
        let divide = Goal::divide_by(2.0).unwrap();
        assert_eq!(divide.achieved(1000.0, 1000.0), 2.0);
        assert_eq!(divide.achieved(3000.0, 1000.0), 4.0);

        let ratio = Goal::ratio_to(2.0).unwrap();
        assert_eq!(ratio.achieved(2000.0, 1000.0), 2.0);
        assert_eq!(ratio.achieved(1000.0, 2000.0), 0.5);
    }

    #[test]
    fn test_achieved_with_zero_r2_is_not_finite() {
        let divide = Goal::divide_by(2.0).unwrap();
        assert!(!divide.achieved(1000.0, 0.0).is_finite());

        let ratio = Goal::ratio_to(2.0).unwrap();
        assert!(!ratio.achieved(1000.0, 0.0).is_finite());
    }
}
