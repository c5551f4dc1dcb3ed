//! Standard E-series resistor value tables.

/// Base values for the E6 (20%) series.
const E6: [f64; 6] = [1.0, 1.5, 2.2, 3.3, 4.7, 6.8];

/// Base values for the E12 (10%) series.
const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Base values for the E24 (5%) series.
const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Base values for the E48 (2%) series.
const E48: [f64; 48] = [
    1.00, 1.05, 1.10, 1.15, 1.21, 1.27, 1.33, 1.40, 1.47, 1.54, 1.62, 1.69, 1.78, 1.87, 1.96,
    2.05, 2.15, 2.26, 2.37, 2.49, 2.61, 2.74, 2.87, 3.01, 3.16, 3.32, 3.48, 3.65, 3.83, 4.02,
    4.22, 4.42, 4.64, 4.87, 5.11, 5.36, 5.62, 5.90, 6.19, 6.49, 6.81, 7.15, 7.50, 7.87, 8.25,
    8.66, 9.09, 9.53,
];

/// Base values for the E96 (1%) series.
const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40,
    1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00,
    2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87,
    2.94, 3.01, 3.09, 3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12,
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90,
    6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45,
    8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// Decade multipliers applied to each base value when expanding a series
/// into a catalog. Covers the 1 Ω .. 10 MΩ span of practical divider
/// resistors, skipping the tens and hundreds decades.
const DECADES: [f64; 5] = [1.0, 1e3, 1e4, 1e5, 1e6];

/// A standard resistor value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// 20% tolerance, 6 values per decade.
    E6,
    /// 10% tolerance, 12 values per decade.
    E12,
    /// 5% tolerance, 24 values per decade.
    E24,
    /// 2% tolerance, 48 values per decade.
    E48,
    /// 1% tolerance, 96 values per decade.
    E96,
}

impl Series {
    /// Base values in the 1.0..10.0 decade.
    pub fn base_values(&self) -> &'static [f64] {
        match self {
            Series::E6 => &E6,
            Series::E12 => &E12,
            Series::E24 => &E24,
            Series::E48 => &E48,
            Series::E96 => &E96,
        }
    }

    /// All values of the series expanded across the standard decades.
    pub fn expanded(&self) -> impl Iterator<Item = f64> + '_ {
        self.base_values()
            .iter()
            .flat_map(|&v| DECADES.iter().map(move |&m| v * m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_table_lengths() {
        assert_eq!(Series::E6.base_values().len(), 6);
        assert_eq!(Series::E12.base_values().len(), 12);
        assert_eq!(Series::E24.base_values().len(), 24);
        assert_eq!(Series::E48.base_values().len(), 48);
        assert_eq!(Series::E96.base_values().len(), 96);
    }

    #[test]
    fn test_expanded_counts() {
        // Decade ranges are disjoint, so no expansion collides
        assert_eq!(Series::E6.expanded().count(), 6 * DECADES.len());
        assert_eq!(Series::E96.expanded().count(), 96 * DECADES.len());
    }

    #[test]
    fn test_expanded_contains_common_values() {
        let e12: Vec<f64> = Series::E12.expanded().collect();
        assert!(e12.contains(&4700.0));
        assert!(e12.contains(&1.0e6));
        assert!(e12.contains(&2.2));
    }
}
