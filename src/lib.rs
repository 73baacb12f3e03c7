//! echomind-run: forward execution from the repository root to the EchoMind
//! backend.
//!
//! The launcher binary sits next to the backend tree; invoking it is
//! equivalent to running `server/run.py` directly. It resolves the entry
//! point relative to its own location, verifies the script exists, and runs
//! it as the top-level program with arguments, environment, and standard
//! streams forwarded.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::env;
use std::ffi::OsString;

use domain::LaunchPaths;
use services::PythonProcessHost;

pub use domain::AppError;

/// Locate `server/run.py` next to the launcher and run it as the main
/// program.
///
/// `args` are forwarded to the backend verbatim. Returns the exit code the
/// backend produced; fails without side effects when the script is absent.
pub fn launch(args: &[OsString]) -> Result<i32, AppError> {
    let paths = launch_paths_from_current_exe()?;
    let host = PythonProcessHost::new();

    app::launch::execute(&host, &paths, args)
}

/// Repository root resolution: the directory containing the launcher binary.
fn launch_paths_from_current_exe() -> Result<LaunchPaths, AppError> {
    let exe = env::current_exe()?;
    let root = exe.parent().ok_or_else(|| AppError::LauncherLocation {
        details: format!("executable path '{}' has no parent directory", exe.display()),
    })?;

    Ok(LaunchPaths::new(root))
}
