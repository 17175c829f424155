//! collapse-sim CLI
//!
//! Runs the collapse choreography simulation and prints the contingency
//! counts with the chi-square verdict. All parameters default to the
//! reference run and can be overridden from the command line or a json
//! configuration file.

use clap::Parser;
use collapse_choreography::constants::SIGNIFICANCE_LEVEL;
use collapse_choreography::utils::format_scientific;
use collapse_choreography::{
    replicate, CollapseSimulation, ConfigIO, ReplicationSummary, SimulationConfig,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collapse-sim")]
#[command(about = "Chi-square independence check for pulse-conditioned collapse trials", long_about = None)]
struct Cli {
    /// Number of synthetic trials to generate
    #[arg(long)]
    trials: Option<usize>,

    /// Seed for the trial generator
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a trial carries an active pulse
    #[arg(long)]
    pulse_prob: Option<f64>,

    /// Collapse probability while a pulse is active
    #[arg(long)]
    collapse_during_pulse: Option<f64>,

    /// Collapse probability without a pulse
    #[arg(long)]
    collapse_baseline: Option<f64>,

    /// Read parameters from a json configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repeat the run over this many consecutive seeds
    #[arg(long, default_value_t = 1)]
    replications: usize,

    /// Emit the report as json instead of the text block
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => SimulationConfig::load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(trials) = cli.trials {
        cfg.trials = trials;
    }
    if let Some(seed) = cli.seed {
        cfg.seed = seed;
    }
    if let Some(pulse_prob) = cli.pulse_prob {
        cfg.pulse_prob = pulse_prob;
    }
    if let Some(collapse_during_pulse) = cli.collapse_during_pulse {
        cfg.collapse_during_pulse = collapse_during_pulse;
    }
    if let Some(collapse_baseline) = cli.collapse_baseline {
        cfg.collapse_baseline = collapse_baseline;
    }

    let simulation = CollapseSimulation::new(cfg)?;

    if cli.replications > 1 {
        let reports = replicate(&simulation, cli.replications)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!(
                    "seed {}: χ² = {:.2}, p-value = {}",
                    report.seed,
                    report.test.statistic,
                    format_scientific(report.test.p_value, 2)
                );
            }
            if let Some(summary) = ReplicationSummary::from_reports(&reports, SIGNIFICANCE_LEVEL) {
                println!();
                println!("{summary}");
            }
        }
    } else {
        let report = simulation.run()?;
        if cli.json {
            println!("{}", report.json_dump()?);
        } else {
            println!("{report}");
        }
    }

    Ok(())
}
