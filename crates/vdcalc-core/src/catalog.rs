//! The catalog of available resistance values.

use crate::series::Series;
use crate::units;

/// A set of distinct resistance values, in ohms.
///
/// Values are kept sorted ascending so that enumeration order (and with it
/// the search's first-seen-wins tie-breaking) is deterministic across runs
/// and platforms. Built once from one or more sources, then consumed
/// read-only by the search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    values: Vec<f64>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single value, keeping the catalog sorted and duplicate-free.
    pub fn insert(&mut self, value: f64) {
        match self.values.binary_search_by(|v| v.total_cmp(&value)) {
            Ok(_) => {}
            Err(pos) => self.values.insert(pos, value),
        }
    }

    /// Add every value of a standard series, expanded across its decades.
    pub fn add_series(&mut self, series: Series) {
        for value in series.expanded() {
            self.insert(value);
        }
    }

    /// Add values from an inventory listing, one resistance token per line.
    ///
    /// Each line goes through [`units::parse_resistance`]; blank and
    /// unparsable lines are skipped.
    pub fn add_inventory(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match units::parse_resistance(line) {
                Some(value) => self.insert(value),
                None => log::debug!("skipping unparsable inventory line: {line:?}"),
            }
        }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the catalog holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// The values as a sorted slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl FromIterator<f64> for Catalog {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for value in iter {
            catalog.insert(value);
        }
        catalog
    }
}
