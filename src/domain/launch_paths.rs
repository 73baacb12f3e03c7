use std::path::{Path, PathBuf};

/// Directory holding the backend, relative to the repository root.
pub const SERVER_DIR: &str = "server";

/// Entry-point script inside [`SERVER_DIR`].
pub const ENTRY_FILE: &str = "run.py";

/// Filesystem layout around the launcher binary.
///
/// The launcher sits at the repository root and the backend entry point is
/// always `<root>/server/run.py`. Both values are fixed for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPaths {
    root: PathBuf,
}

impl LaunchPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository root: the directory containing the launcher binary.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the backend entry-point script.
    pub fn entry_point(&self) -> PathBuf {
        self.root.join(SERVER_DIR).join(ENTRY_FILE)
    }
}
