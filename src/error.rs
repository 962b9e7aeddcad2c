use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used when `pre-commit` is not on the search path.
pub const EXIT_NOT_FOUND: u8 = 127;
/// Exit code used when `pre-commit` exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: u8 = 126;
/// Exit code for every other failure of this program.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    /// The hook repository directory could not be determined. Nothing was spawned.
    #[error("failed to resolve hook repository directory from {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external tool could not be started.
    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Shell-style exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Resolve { .. } => EXIT_FAILURE,
            Self::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_FAILURE,
            },
        }
    }
}

/// Exit code for an error surfaced by [`crate::cli::run`].
///
/// Typed [`Error`]s carry their own code; anything else (e.g. the environment refusing
/// to tell us our own executable path) is a plain failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>()
        .map_or(EXIT_FAILURE, Error::exit_code)
}
