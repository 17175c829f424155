//! Contingency Table
//!
//! The 2x2 joint-count table built from simulated trials and fed to the
//! chi-square independence test.
use serde::{Deserialize, Serialize};

/// Joint counts of (pulse, collapse) outcomes over one simulated run.
///
/// The table is laid out with pulse state as rows and collapse state as
/// columns:
/// [[pulse_collapse,    pulse_no_collapse],
///  [no_pulse_collapse, no_pulse_no_collapse]]
///
/// The four cells always sum to the number of recorded trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// Trials with an active pulse that collapsed.
    pub pulse_collapse: u64,
    /// Trials with an active pulse that did not collapse.
    pub pulse_no_collapse: u64,
    /// Trials without a pulse that collapsed.
    pub no_pulse_collapse: u64,
    /// Trials without a pulse that did not collapse.
    pub no_pulse_no_collapse: u64,
}

impl ContingencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        ContingencyTable::default()
    }

    /// Build a table directly from the four cell counts.
    pub fn from_counts(
        pulse_collapse: u64,
        pulse_no_collapse: u64,
        no_pulse_collapse: u64,
        no_pulse_no_collapse: u64,
    ) -> Self {
        ContingencyTable {
            pulse_collapse,
            pulse_no_collapse,
            no_pulse_collapse,
            no_pulse_no_collapse,
        }
    }

    /// Record one trial outcome in the matching cell.
    pub fn record(&mut self, pulse: bool, collapse: bool) {
        match (pulse, collapse) {
            (true, true) => self.pulse_collapse += 1,
            (true, false) => self.pulse_no_collapse += 1,
            (false, true) => self.no_pulse_collapse += 1,
            (false, false) => self.no_pulse_no_collapse += 1,
        }
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> u64 {
        self.pulse_collapse + self.pulse_no_collapse + self.no_pulse_collapse + self.no_pulse_no_collapse
    }

    /// Row margin: trials with an active pulse.
    pub fn pulse_total(&self) -> u64 {
        self.pulse_collapse + self.pulse_no_collapse
    }

    /// Row margin: trials without a pulse.
    pub fn no_pulse_total(&self) -> u64 {
        self.no_pulse_collapse + self.no_pulse_no_collapse
    }

    /// Column margin: trials that collapsed.
    pub fn collapse_total(&self) -> u64 {
        self.pulse_collapse + self.no_pulse_collapse
    }

    /// Column margin: trials that did not collapse.
    pub fn no_collapse_total(&self) -> u64 {
        self.pulse_no_collapse + self.no_pulse_no_collapse
    }

    /// Observed cell counts as floats, row major.
    pub fn cells(&self) -> [[f64; 2]; 2] {
        [
            [self.pulse_collapse as f64, self.pulse_no_collapse as f64],
            [self.no_pulse_collapse as f64, self.no_pulse_no_collapse as f64],
        ]
    }

    /// Expected cell frequencies under independence of pulse and collapse,
    /// the product of the matching margins over the total.
    ///
    /// An empty table yields all-zero expectations.
    pub fn expected(&self) -> [[f64; 2]; 2] {
        let n = self.total() as f64;
        if n == 0.0 {
            return [[0.0; 2]; 2];
        }
        let rows = [self.pulse_total() as f64, self.no_pulse_total() as f64];
        let cols = [self.collapse_total() as f64, self.no_collapse_total() as f64];
        [
            [rows[0] * cols[0] / n, rows[0] * cols[1] / n],
            [rows[1] * cols[0] / n, rows[1] * cols[1] / n],
        ]
    }

    /// True when any row or column margin is zero, which leaves the
    /// independence test undefined.
    pub fn has_zero_margin(&self) -> bool {
        self.pulse_total() == 0
            || self.no_pulse_total() == 0
            || self.collapse_total() == 0
            || self.no_collapse_total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_hits_matching_cell() {
        let mut table = ContingencyTable::new();
        table.record(true, true);
        table.record(true, false);
        table.record(true, false);
        table.record(false, true);
        table.record(false, false);
        assert_eq!(table.pulse_collapse, 1);
        assert_eq!(table.pulse_no_collapse, 2);
        assert_eq!(table.no_pulse_collapse, 1);
        assert_eq!(table.no_pulse_no_collapse, 1);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_margins() {
        let table = ContingencyTable::from_counts(10, 5, 10, 20);
        assert_eq!(table.total(), 45);
        assert_eq!(table.pulse_total(), 15);
        assert_eq!(table.no_pulse_total(), 30);
        assert_eq!(table.collapse_total(), 20);
        assert_eq!(table.no_collapse_total(), 25);
    }

    #[test]
    fn test_expected_from_margins() {
        let table = ContingencyTable::from_counts(10, 5, 10, 20);
        let expected = table.expected();
        // Margins: rows 15/30, columns 20/25, n = 45.
        assert!((expected[0][0] - 15.0 * 20.0 / 45.0).abs() < 1e-12);
        assert!((expected[0][1] - 15.0 * 25.0 / 45.0).abs() < 1e-12);
        assert!((expected[1][0] - 30.0 * 20.0 / 45.0).abs() < 1e-12);
        assert!((expected[1][1] - 30.0 * 25.0 / 45.0).abs() < 1e-12);

        // Expected frequencies keep the observed margins.
        let row0 = expected[0][0] + expected[0][1];
        let col0 = expected[0][0] + expected[1][0];
        assert!((row0 - 15.0).abs() < 1e-12);
        assert!((col0 - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_margins() {
        assert!(ContingencyTable::new().has_zero_margin());
        assert!(ContingencyTable::from_counts(0, 0, 10, 20).has_zero_margin());
        assert!(ContingencyTable::from_counts(0, 10, 0, 20).has_zero_margin());
        assert!(ContingencyTable::from_counts(10, 0, 20, 0).has_zero_margin());
        assert!(!ContingencyTable::from_counts(1, 1, 1, 1).has_zero_margin());
        assert_eq!(ContingencyTable::new().expected(), [[0.0; 2]; 2]);
    }
}
