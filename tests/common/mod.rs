//! Shared testing utilities for launcher CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated repository root for CLI exercises.
///
/// The launcher resolves the backend relative to its own location, so the
/// compiled binary is copied into a fresh temporary root; tests then shape
/// the `server/` tree around it.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    root_path: PathBuf,
    launcher_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated repository root containing only the launcher.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        // current_exe resolves symlinks, so expectations must be built from
        // the canonical root.
        let root_path = root.path().canonicalize().expect("Failed to canonicalize test root");

        let built = PathBuf::from(env!("CARGO_BIN_EXE_echomind-run"));
        let launcher_path = root_path.join("echomind-run");
        fs::copy(&built, &launcher_path).expect("Failed to copy launcher into test root");

        Self { root, root_path, launcher_path }
    }

    /// Canonical path of the emulated repository root.
    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Path where the launcher expects the backend entry point.
    pub fn entry_point_path(&self) -> PathBuf {
        self.root_path.join("server").join("run.py")
    }

    /// Write `server/run.py` with the given content.
    pub fn write_entry_point(&self, content: &str) {
        let path = self.entry_point_path();
        fs::create_dir_all(path.parent().expect("entry point has a parent"))
            .expect("Failed to create server directory");
        fs::write(&path, content).expect("Failed to write entry point");
    }

    /// Create the `server/` directory without an entry point inside it.
    pub fn create_empty_server_dir(&self) {
        fs::create_dir_all(self.root_path.join("server"))
            .expect("Failed to create server directory");
    }

    /// Build a command for invoking the relocated launcher binary.
    pub fn launcher(&self) -> Command {
        let mut cmd = Command::new(&self.launcher_path);
        cmd.current_dir(&self.root_path);
        cmd
    }
}
