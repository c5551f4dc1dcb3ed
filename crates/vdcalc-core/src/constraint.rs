//! Optional bounds on the resistor pair.

/// Inclusive bounds on R1, R2, and R1 + R2.
///
/// Every bound is optional; `None` means unconstrained. A value equal to a
/// bound passes it. Unlike a negative-number sentinel encoding, an exact
/// zero bound is expressible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    /// R1 must be at least this value.
    pub min_r1: Option<f64>,
    /// R1 cannot exceed this value.
    pub max_r1: Option<f64>,
    /// R2 must be at least this value.
    pub min_r2: Option<f64>,
    /// R2 cannot exceed this value.
    pub max_r2: Option<f64>,
    /// R1 + R2 must be at least this value.
    pub min_sum: Option<f64>,
    /// R1 + R2 cannot exceed this value.
    pub max_sum: Option<f64>,
}

impl Constraints {
    /// Create an unconstrained set of bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum R1 bound.
    pub fn with_min_r1(mut self, bound: f64) -> Self {
        self.min_r1 = Some(bound);
        self
    }

    /// Set the maximum R1 bound.
    pub fn with_max_r1(mut self, bound: f64) -> Self {
        self.max_r1 = Some(bound);
        self
    }

    /// Set the minimum R2 bound.
    pub fn with_min_r2(mut self, bound: f64) -> Self {
        self.min_r2 = Some(bound);
        self
    }

    /// Set the maximum R2 bound.
    pub fn with_max_r2(mut self, bound: f64) -> Self {
        self.max_r2 = Some(bound);
        self
    }

    /// Set the minimum R1 + R2 bound.
    pub fn with_min_sum(mut self, bound: f64) -> Self {
        self.min_sum = Some(bound);
        self
    }

    /// Set the maximum R1 + R2 bound.
    pub fn with_max_sum(mut self, bound: f64) -> Self {
        self.max_sum = Some(bound);
        self
    }

    /// Whether the pair (r1, r2) satisfies every configured bound.
    pub fn admits(&self, r1: f64, r2: f64) -> bool {
        if self.max_r1.is_some_and(|b| r1 > b) {
            return false;
        }
        if self.min_r1.is_some_and(|b| r1 < b) {
            return false;
        }
        if self.max_r2.is_some_and(|b| r2 > b) {
            return false;
        }
        if self.min_r2.is_some_and(|b| r2 < b) {
            return false;
        }

        let sum = r1 + r2;
        if self.max_sum.is_some_and(|b| sum > b) {
            return false;
        }
        if self.min_sum.is_some_and(|b| sum < b) {
            return false;
        }

        true
    }
}
