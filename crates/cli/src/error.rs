//! Errors from `cellgrid run` / `cellgrid list`, each tied to an exit code.
//!
//! | code | meaning |
//! |------|---------|
//! | 2    | argument parse error (clap, before `run`) |
//! | 10   | the simulation rejected the request |
//! | 11   | a file could not be read or written |
//! | 12   | `--params` or the seed file is malformed |
//! | 13   | JSON output could not be produced |

use cellgrid_core::SimError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown rule, pattern or preset, bad dimensions, bad rulestring.
    #[error(transparent)]
    Sim(SimError),

    #[error("cannot read seed file {}: {reason}", path.display())]
    ReadSeed { path: PathBuf, reason: String },

    #[error("cannot write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("invalid seed file {}: {source}", path.display())]
    BadSeedFile { path: PathBuf, source: SimError },

    #[error("invalid --params: {0}")]
    BadParams(String),

    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// A write failure at `path`.
    pub fn write(path: &Path, reason: impl ToString) -> Self {
        CliError::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// A simulation error raised while writing `path`; I/O failures keep
    /// the path, everything else stays a simulation error.
    pub fn writing(path: &Path, err: SimError) -> Self {
        match err {
            SimError::Io(reason) => CliError::write(path, reason),
            other => CliError::Sim(other),
        }
    }

    /// Process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sim(_) => 10,
            CliError::ReadSeed { .. } | CliError::Write { .. } => 11,
            CliError::BadSeedFile { .. } | CliError::BadParams(_) => 12,
            CliError::Output(_) => 13,
        }
    }
}

impl From<SimError> for CliError {
    fn from(e: SimError) -> Self {
        CliError::Sim(e)
    }
}
