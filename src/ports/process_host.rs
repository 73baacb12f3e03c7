use std::ffi::OsString;
use std::path::Path;

use crate::domain::AppError;

/// Host capable of running the backend entry point as the main program.
pub trait ProcessHost {
    /// Execute `script` as a top-level program with `args` forwarded,
    /// blocking until it exits.
    ///
    /// Returns the exit code the delegated program produced. The script
    /// inherits the launcher's standard streams, environment, and working
    /// directory; nothing it writes or raises is intercepted.
    fn run_as_main(&self, script: &Path, args: &[OsString]) -> Result<i32, AppError>;
}
