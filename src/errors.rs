//! Errors
//!
//! Custom error types used throughout the `collapse-choreography` crate.
use thiserror::Error;

/// Errors that can occur while simulating or testing collapse data.
#[derive(Debug, Error)]
pub enum ChoreographyError {
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The contingency table has an empty margin, so the test is undefined.
    #[error("Degenerate contingency table, the {0} margin is zero.")]
    DegenerateTable(String),
    /// Unable to write to a file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read from a file.
    #[error("Unable to read from a file {0}")]
    UnableToRead(String),
}
