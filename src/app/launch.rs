use std::ffi::OsString;

use crate::domain::{AppError, LaunchPaths};
use crate::ports::ProcessHost;

/// Execute the launch operation: locate the backend entry point under
/// `paths`, verify it exists, and hand control to it.
///
/// The existence check happens before any delegation, so a missing script
/// fails without side effects. Returns the exit code the backend produced.
pub fn execute<H>(host: &H, paths: &LaunchPaths, args: &[OsString]) -> Result<i32, AppError>
where
    H: ProcessHost,
{
    let entry_point = paths.entry_point();

    if !entry_point.exists() {
        return Err(AppError::MissingEntryPoint { path: entry_point });
    }

    host.run_as_main(&entry_point, args)
}
