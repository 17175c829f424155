//! Collapse Simulation
//!
//! Generates the synthetic pulse/collapse trials, tabulates them, and runs
//! the chi-square independence test. The whole pipeline is deterministic
//! given the configured seed.
use crate::config::SimulationConfig;
use crate::errors::ChoreographyError;
use crate::report::SimulationReport;
use crate::stats::chi2_contingency;
use crate::table::ContingencyTable;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Collapse Choreography simulation object.
#[derive(Debug, Clone, Default)]
pub struct CollapseSimulation {
    pub cfg: SimulationConfig,
}

impl CollapseSimulation {
    /// Create a simulation from a configuration.
    ///
    /// * `cfg` - Simulation parameters, validated before use.
    pub fn new(cfg: SimulationConfig) -> Result<Self, ChoreographyError> {
        let simulation = CollapseSimulation { cfg };
        simulation.cfg.validate()?;
        Ok(simulation)
    }

    // Set methods for parameters

    /// Set the number of trials on the simulation.
    /// * `trials` - Number of synthetic trials to generate.
    pub fn set_trials(mut self, trials: usize) -> Self {
        self.cfg.trials = trials;
        self
    }

    /// Set the seed on the simulation.
    /// * `seed` - Integer value used to seed the trial generation.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set the pulse probability on the simulation.
    /// * `pulse_prob` - Probability that a trial carries an active pulse.
    pub fn set_pulse_prob(mut self, pulse_prob: f64) -> Self {
        self.cfg.pulse_prob = pulse_prob;
        self
    }

    /// Set the collapse probability during a pulse.
    /// * `collapse_during_pulse` - Collapse probability while a pulse is active.
    pub fn set_collapse_during_pulse(mut self, collapse_during_pulse: f64) -> Self {
        self.cfg.collapse_during_pulse = collapse_during_pulse;
        self
    }

    /// Set the baseline collapse probability.
    /// * `collapse_baseline` - Collapse probability without a pulse.
    pub fn set_collapse_baseline(mut self, collapse_baseline: f64) -> Self {
        self.cfg.collapse_baseline = collapse_baseline;
        self
    }

    /// Generate the trials and tabulate them into a contingency table.
    ///
    /// Each trial consumes two uniform draws in order: one for the pulse
    /// decision and one fresh draw for the collapse decision, whose
    /// threshold depends on the pulse state of the same trial. A single
    /// draw is never reused for both decisions.
    pub fn generate(&self, rng: &mut StdRng) -> ContingencyTable {
        let mut table = ContingencyTable::new();
        for i in 0..self.cfg.trials {
            let pulse = rng.gen::<f64>() < self.cfg.pulse_prob;
            let threshold = if pulse {
                self.cfg.collapse_during_pulse
            } else {
                self.cfg.collapse_baseline
            };
            let collapse = rng.gen::<f64>() < threshold;
            table.record(pulse, collapse);

            if self.cfg.log_trials > 0 && (i + 1) % self.cfg.log_trials == 0 {
                info!("Simulated {} of {} trials", i + 1, self.cfg.trials);
            }
        }
        table
    }

    /// Run the full pipeline with the configured seed: generate, tabulate,
    /// test, and assemble the report.
    pub fn run(&self) -> Result<SimulationReport, ChoreographyError> {
        self.run_with_seed(self.cfg.seed)
    }

    /// Run the full pipeline with an explicit seed, leaving the rest of the
    /// configuration untouched. Replication uses this to walk a seed family.
    pub fn run_with_seed(&self, seed: u64) -> Result<SimulationReport, ChoreographyError> {
        self.cfg.validate()?;

        info!(
            "Running collapse simulation: trials={}, seed={}, pulse_prob={}, collapse_during_pulse={}, collapse_baseline={}",
            self.cfg.trials,
            seed,
            self.cfg.pulse_prob,
            self.cfg.collapse_during_pulse,
            self.cfg.collapse_baseline
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let table = self.generate(&mut rng);
        let test = chi2_contingency(&table, true)?;

        info!(
            "Independence test complete: statistic={:.4}, p_value={:.4e}",
            test.statistic, test.p_value
        );

        Ok(SimulationReport {
            seed,
            trials: self.cfg.trials,
            table,
            test,
            boost_ratio: self.cfg.boost_ratio(),
        })
    }
}
