// Modules
pub mod config;
pub mod constants;
pub mod errors;
pub mod replication;
pub mod report;
pub mod simulation;
pub mod stats;
pub mod table;
pub mod utils;

// Individual classes, and functions
pub use config::{ConfigIO, SimulationConfig};
pub use replication::{replicate, ReplicationSummary};
pub use report::SimulationReport;
pub use simulation::CollapseSimulation;
pub use stats::{chi2_contingency, ChiSquareResult};
pub use table::ContingencyTable;
