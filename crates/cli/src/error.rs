//! Failures of the `iron-filings` binary, each with its own exit code.
//!
//! - 0:  the PNG (and seed file, if asked for) was written
//! - 2:  bad command line, reported by clap
//! - 10: the run description is rejected: a seed file or `--params` that
//!   fails `Seed::validate` (zero-area bounds, zero counts, out-of-range
//!   parameters, bad tint), or a canvas too large to allocate
//! - 11: the seed file cannot be read, or the PNG or saved seed cannot be
//!   written
//! - 12: `--params` or the seed file is not valid JSON for its shape
//! - 13: a run summary or seed could not be serialized

use iron_filings_core::SimError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Sim(SimError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sim(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sim(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<SimError> for CliError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::Io(msg) => CliError::Io(msg),
            other => CliError::Sim(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
