use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::domain::AppError;
use crate::ports::ProcessHost;

/// Environment variable naming the interpreter executable. When unset the
/// interpreter is discovered on `PATH`.
pub const PYTHON_ENV_VAR: &str = "ECHOMIND_PYTHON";

/// Production [`ProcessHost`] that runs the entry point under a Python
/// interpreter.
///
/// Handing the script to the interpreter as its top-level program means the
/// backend observes `__name__ == "__main__"` without any emulation.
#[derive(Debug, Default, Clone)]
pub struct PythonProcessHost;

impl PythonProcessHost {
    pub fn new() -> Self {
        Self
    }

    /// Interpreter executable: the `ECHOMIND_PYTHON` override when set and
    /// non-empty, otherwise the platform's conventional Python 3 name.
    fn interpreter() -> OsString {
        match env::var_os(PYTHON_ENV_VAR) {
            Some(explicit) if !explicit.is_empty() => explicit,
            _ => {
                let name = if cfg!(windows) { "python" } else { "python3" };
                OsString::from(name)
            }
        }
    }
}

impl ProcessHost for PythonProcessHost {
    fn run_as_main(&self, script: &Path, args: &[OsString]) -> Result<i32, AppError> {
        let interpreter = Self::interpreter();

        let mut command = Command::new(&interpreter);
        command.arg(script);
        command.args(args);

        // stdin/stdout/stderr, environment, and working directory are all
        // inherited from the launcher.
        let status = command.status().map_err(|e| spawn_error(&interpreter, script, e))?;

        match status.code() {
            Some(code) => Ok(code),
            None => Ok(terminated_by_signal(status)),
        }
    }
}

fn spawn_error(interpreter: &OsStr, script: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        return AppError::InterpreterNotFound {
            interpreter: interpreter.to_string_lossy().into_owned(),
        };
    }
    AppError::LaunchFailed {
        command: format!("{} {}", interpreter.to_string_lossy(), script.display()),
        details: err.to_string(),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&status) {
        128 + signal
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    -1
}
