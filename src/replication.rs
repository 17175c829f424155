//! Replication
//!
//! Runs the same simulation over a family of consecutive seeds in parallel
//! and aggregates the test outcomes, so the headline result can be checked
//! for seed sensitivity.
use crate::errors::ChoreographyError;
use crate::report::SimulationReport;
use crate::simulation::CollapseSimulation;
use crate::utils::format_scientific;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Run the simulation once per seed in `base_seed..base_seed + replications`,
/// where `base_seed` is the seed configured on the simulation. Seeds wrap
/// around at `u64::MAX`. Reports come back in seed order.
pub fn replicate(
    simulation: &CollapseSimulation,
    replications: usize,
) -> Result<Vec<SimulationReport>, ChoreographyError> {
    let base_seed = simulation.cfg.seed;
    (0..replications)
        .into_par_iter()
        .map(|i| simulation.run_with_seed(base_seed.wrapping_add(i as u64)))
        .collect()
}

/// Aggregate view over a family of replicated runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplicationSummary {
    /// Number of runs aggregated.
    pub runs: usize,
    /// Mean chi-square statistic across runs.
    pub mean_statistic: f64,
    /// Smallest statistic observed.
    pub min_statistic: f64,
    /// Largest statistic observed.
    pub max_statistic: f64,
    /// Mean p-value across runs.
    pub mean_p_value: f64,
    /// Significance level the rejection rate is measured against.
    pub alpha: f64,
    /// Fraction of runs with p-value below `alpha`.
    pub rejection_rate: f64,
}

impl ReplicationSummary {
    /// Summarize a slice of reports at significance level `alpha`.
    /// Returns `None` for an empty slice.
    pub fn from_reports(reports: &[SimulationReport], alpha: f64) -> Option<Self> {
        if reports.is_empty() {
            return None;
        }
        let runs = reports.len();
        let mut statistic_sum = 0.0;
        let mut p_sum = 0.0;
        let mut min_statistic = f64::INFINITY;
        let mut max_statistic = f64::NEG_INFINITY;
        let mut rejections = 0_usize;
        for report in reports {
            statistic_sum += report.test.statistic;
            p_sum += report.test.p_value;
            min_statistic = min_statistic.min(report.test.statistic);
            max_statistic = max_statistic.max(report.test.statistic);
            if report.test.p_value < alpha {
                rejections += 1;
            }
        }
        Some(ReplicationSummary {
            runs,
            mean_statistic: statistic_sum / runs as f64,
            min_statistic,
            max_statistic,
            mean_p_value: p_sum / runs as f64,
            alpha,
            rejection_rate: rejections as f64 / runs as f64,
        })
    }
}

impl fmt::Display for ReplicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== REPLICATION SUMMARY ({} runs) ===", self.runs)?;
        writeln!(
            f,
            "χ² mean = {:.2} (min {:.2}, max {:.2})",
            self.mean_statistic, self.min_statistic, self.max_statistic
        )?;
        writeln!(f, "mean p-value = {}", format_scientific(self.mean_p_value, 2))?;
        write!(
            f,
            "rejected at α = {} in {:.1}% of runs",
            self.alpha,
            self.rejection_rate * 100.0
        )
    }
}
