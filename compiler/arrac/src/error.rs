//! Host-side failures of the driver.
//!
//! These are problems with the process environment (arguments, files,
//! streams). Problems with the program being run are error values and
//! never reach this type.

use std::io;
use std::path::PathBuf;

/// Errors that stop the driver.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line; the message says what was wrong.
    #[error("{0}")]
    Usage(String),

    #[error("Couldn't open {} for reading: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Open { .. } | CliError::Io(_) => 1,
        }
    }
}
