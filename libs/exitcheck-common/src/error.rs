use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Every condition that aborts a harness run.
///
/// Exit code mismatches are not errors; they are counted as failed cases.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("test suite not found: {}", .0.display())]
    SuiteNotFound(PathBuf),

    #[error("failed to read test suite: {0}")]
    SuiteRead(#[from] csv::Error),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("test case '{name}' has an empty argument string")]
    EmptyCommand { name: String },

    #[error("failed to spawn '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write report to {}: {reason}", path.display())]
    Report { path: PathBuf, reason: String },
}
