// Reference run parameters of the collapse choreography simulation.
pub const DEFAULT_TRIALS: usize = 10_000;
pub const DEFAULT_PULSE_PROB: f64 = 0.10;
pub const DEFAULT_COLLAPSE_DURING_PULSE: f64 = 0.15;
pub const DEFAULT_COLLAPSE_BASELINE: f64 = 0.05;
pub const DEFAULT_SEED: u64 = 42;

pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
