use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
///
/// Every variant describes a failure that happens *before* control reaches
/// the backend. Failures inside the backend are its own: the launcher
/// passes its exit status through untouched.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The backend entry point is missing from the expected location.
    #[error("Server run script not found: {}", path.display())]
    MissingEntryPoint { path: PathBuf },

    /// The directory containing the launcher binary could not be resolved.
    #[error("Could not resolve launcher directory: {details}")]
    LauncherLocation { details: String },

    /// The Python interpreter is not available.
    #[error(
        "Python interpreter '{interpreter}' not found; install Python 3 or set ECHOMIND_PYTHON"
    )]
    InterpreterNotFound { interpreter: String },

    /// Spawning the backend process failed.
    #[error("Failed to launch '{command}': {details}")]
    LaunchFailed { command: String, details: String },
}
