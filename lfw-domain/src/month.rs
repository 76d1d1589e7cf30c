//! Month presets for the dashboard's time selector.

use serde::{Deserialize, Serialize};

/// A (year, month) pair drawn from the fixed preset list.
///
/// Used as a toggle key: clicking the currently selected preset again
/// clears the selection. Toggle identity is the `(year, month)` tuple,
/// not the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPreset {
    pub label: String,
    pub year: i32,
    pub month: u32,
}

impl MonthPreset {
    pub fn new(label: &str, year: i32, month: u32) -> Self {
        Self {
            label: label.to_string(),
            year,
            month,
        }
    }

    /// Toggle identity: same (year, month) tuple.
    pub fn same_period(&self, other: &MonthPreset) -> bool {
        self.year == other.year && self.month == other.month
    }
}

/// The fixed preset list offered by the dashboard.
///
/// These are the months for which raster imagery has been processed on
/// the backend.
pub fn month_presets() -> Vec<MonthPreset> {
    vec![
        MonthPreset::new("Jan 2024", 2024, 1),
        MonthPreset::new("Mar 2024", 2024, 3),
        MonthPreset::new("Apr 2024", 2024, 4),
        MonthPreset::new("May 2024", 2024, 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_period_ignores_label() {
        let a = MonthPreset::new("Mar 2024", 2024, 3);
        let b = MonthPreset::new("2024-03", 2024, 3);
        assert!(a.same_period(&b));
        let c = MonthPreset::new("Mar 2025", 2025, 3);
        assert!(!a.same_period(&c));
    }

    #[test]
    fn presets_are_unique_periods() {
        let presets = month_presets();
        for (i, a) in presets.iter().enumerate() {
            for b in presets.iter().skip(i + 1) {
                assert!(!a.same_period(b), "duplicate preset {:?}", a);
            }
        }
    }
}
