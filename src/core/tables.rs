//! Lookup table access and derating limits
//!
//! The handbook tables themselves live as `static` constants next to the
//! calculators that use them; this module carries the
//! mutable-by-configuration pieces (derating stress limits) and the
//! indexing helpers that turn a 1-based handbook index into either a
//! table value or a `TableError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Category;

/// A failed table lookup. Calculators convert these into a factor of 0.0
/// plus an ERROR diagnostic; they never escape the public API.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("no {table} entry for index {index}")]
    IndexOutOfRange { table: &'static str, index: u32 },
    #[error("no {table} entry for value {value}")]
    ValueOutOfRange { table: &'static str, value: f64 },
}

/// Fetch a 1-based handbook index from a table row.
pub fn pick(table: &'static str, row: &[f64], index: u32) -> Result<f64, TableError> {
    if index == 0 {
        return Err(TableError::IndexOutOfRange { table, index });
    }
    row.get(index as usize - 1)
        .copied()
        .ok_or(TableError::IndexOutOfRange { table, index })
}

/// Fetch the value for the first breakpoint at or above `value`; values
/// above the last breakpoint take the final slot.
pub fn pick_by_breaks(
    table: &'static str,
    breaks: &[f64],
    values: &[f64],
    value: f64,
) -> Result<f64, TableError> {
    debug_assert_eq!(breaks.len() + 1, values.len());
    if !value.is_finite() {
        return Err(TableError::ValueOutOfRange { table, value });
    }
    let idx = breaks.iter().position(|b| value <= *b).unwrap_or(breaks.len());
    Ok(values[idx])
}

/// Derating limits for one category.
///
/// Order: current (harsh, mild), power (harsh, mild), voltage
/// (harsh, mild), delta-T to rated max in degrees C (harsh, mild),
/// absolute max operating temperature in degrees C (harsh, mild).
pub type LimitRow = [f64; 10];

/// Per-category derating limits, overridable from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressLimits {
    pub resistor: LimitRow,
    pub capacitor: LimitRow,
    pub relay: LimitRow,
    pub switch: LimitRow,
    pub connection: LimitRow,
    pub meter: LimitRow,
    pub miscellaneous: LimitRow,
}

impl Default for StressLimits {
    fn default() -> Self {
        StressLimits {
            resistor: [1.0, 1.0, 0.5, 0.9, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0],
            capacitor: [1.0, 1.0, 1.0, 1.0, 0.6, 0.9, 10.0, 0.0, 125.0, 125.0],
            relay: [0.75, 0.9, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0],
            switch: [0.75, 0.9, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0],
            connection: [0.7, 0.9, 1.0, 1.0, 0.7, 0.9, 25.0, 0.0, 125.0, 125.0],
            meter: [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0],
            miscellaneous: [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 125.0, 125.0],
        }
    }
}

impl StressLimits {
    pub fn for_category(&self, category: Category) -> &LimitRow {
        match category {
            Category::Resistor => &self.resistor,
            Category::Capacitor => &self.capacitor,
            Category::Relay => &self.relay,
            Category::Switch => &self.switch,
            Category::Connection => &self.connection,
            Category::Meter => &self.meter,
            Category::Miscellaneous => &self.miscellaneous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_is_one_based() {
        let row = [1.0, 2.0, 3.0];
        assert_eq!(pick("piQ", &row, 1), Ok(1.0));
        assert_eq!(pick("piQ", &row, 3), Ok(3.0));
        assert_eq!(
            pick("piQ", &row, 0),
            Err(TableError::IndexOutOfRange { table: "piQ", index: 0 })
        );
        assert!(pick("piQ", &row, 4).is_err());
    }

    #[test]
    fn pick_by_breaks_takes_first_matching_band() {
        let breaks = [0.1, 0.2, 0.6];
        let values = [1.1, 1.05, 1.0, 2.0];
        assert_eq!(pick_by_breaks("piV", &breaks, &values, 0.05), Ok(1.1));
        assert_eq!(pick_by_breaks("piV", &breaks, &values, 0.2), Ok(1.05));
        assert_eq!(pick_by_breaks("piV", &breaks, &values, 0.99), Ok(2.0));
    }

    #[test]
    fn limits_round_trip_through_yaml() {
        let limits = StressLimits::default();
        let yaml = serde_yml::to_string(&limits).unwrap();
        let back: StressLimits = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(limits, back);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = "relay: [0.6, 0.8, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 105.0, 110.0]\n";
        let limits: StressLimits = serde_yml::from_str(yaml).unwrap();
        assert_eq!(limits.relay[0], 0.6);
        assert_eq!(limits.capacitor, StressLimits::default().capacitor);
    }
}
