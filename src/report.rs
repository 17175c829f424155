//! Simulation Report
//!
//! Final artifact of a simulation run: the tabulated counts, the test
//! outcome, and the configured collapse boost ratio, with the fixed
//! plain-text rendering used by the command line tool.
use crate::errors::ChoreographyError;
use crate::stats::ChiSquareResult;
use crate::table::ContingencyTable;
use crate::utils::format_scientific;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one full simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the trials were generated from.
    pub seed: u64,
    /// Number of trials tabulated.
    pub trials: usize,
    /// Joint counts of the pulse and collapse conditions.
    pub table: ContingencyTable,
    /// Chi-square independence test over the table.
    pub test: ChiSquareResult,
    /// Configured ratio of collapse probability with and without a pulse.
    /// Reported as-is, independent of the sampled counts.
    pub boost_ratio: f64,
}

impl SimulationReport {
    /// Dump the report as a json object.
    pub fn json_dump(&self) -> Result<String, ChoreographyError> {
        match serde_json::to_string_pretty(self) {
            Ok(json) => Ok(json),
            Err(e) => Err(ChoreographyError::UnableToWrite(e.to_string())),
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== COLLAPSE CHOREOGRAPHY SIMULATION RESULTS ===")?;
        writeln!(f, "Semantic Pulse + Collapse: {}", self.table.pulse_collapse)?;
        writeln!(f, "Semantic Pulse + No Collapse: {}", self.table.pulse_no_collapse)?;
        writeln!(f, "No Pulse + Collapse: {}", self.table.no_pulse_collapse)?;
        writeln!(f, "No Pulse + No Collapse: {}", self.table.no_pulse_no_collapse)?;
        writeln!(f)?;
        writeln!(f, "χ² = {:.2}", self.test.statistic)?;
        writeln!(f, "p-value = {}", format_scientific(self.test.p_value, 2))?;
        write!(
            f,
            "→ Collapse is ~{:.1}× more likely during intent",
            self.boost_ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::chi2_contingency;

    fn fixed_report() -> SimulationReport {
        let table = ContingencyTable::from_counts(10, 5, 10, 20);
        let test = chi2_contingency(&table, false).unwrap();
        SimulationReport {
            seed: 42,
            trials: 45,
            table,
            test,
            boost_ratio: 3.0,
        }
    }

    #[test]
    fn test_display_block_is_exact() {
        let report = fixed_report();
        let expected = "\
=== COLLAPSE CHOREOGRAPHY SIMULATION RESULTS ===
Semantic Pulse + Collapse: 10
Semantic Pulse + No Collapse: 5
No Pulse + Collapse: 10
No Pulse + No Collapse: 20

χ² = 4.50
p-value = 3.39e-02
→ Collapse is ~3.0× more likely during intent";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_display_has_no_trailing_newline() {
        let rendered = fixed_report().to_string();
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = fixed_report();
        let json = report.json_dump().unwrap();
        let loaded: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, report);
    }
}
