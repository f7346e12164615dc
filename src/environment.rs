use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ambient process state the locator reads.
///
/// `ProcessEnvironment` reads the real process; tests and callers that want to
/// probe from somewhere else provide their own implementation.
pub trait Environment {
    /// The working directory the first probe chain starts from.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Directory containing the executing module, symlinks resolved.
    /// `None` skips the second probe chain.
    fn module_dir(&self) -> Option<PathBuf>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The running process: its working directory and its executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context(
            "🛑 Couldn't read the current working directory.\n\
             → It may have been deleted or you may lack permission to access it.",
        )
    }

    fn module_dir(&self) -> Option<PathBuf> {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                debug!("executable path unavailable: {e}");
                return None;
            }
        };

        let resolved = match fs::canonicalize(&exe) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(exe = %exe.display(), "failed to resolve executable path: {e}");
                return None;
            }
        };

        resolved.parent().map(Path::to_path_buf)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Wraps another environment, replacing its working directory.
#[derive(Debug, Clone)]
pub struct WithWorkingDir<E> {
    inner: E,
    working_dir: PathBuf,
}

impl<E: Environment> WithWorkingDir<E> {
    pub fn new(inner: E, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            working_dir: working_dir.into(),
        }
    }
}

impl<E: Environment> Environment for WithWorkingDir<E> {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.working_dir.clone())
    }

    fn module_dir(&self) -> Option<PathBuf> {
        self.inner.module_dir()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_process_current_dir_is_absolute() {
        let cwd = ProcessEnvironment.current_dir().unwrap();
        assert!(cwd.is_absolute());
    }

    #[test]
    fn test_process_module_dir_is_resolved() {
        let dir = ProcessEnvironment
            .module_dir()
            .expect("test binary location should be known");

        assert!(dir.is_absolute());
        assert!(dir.is_dir());
        // Already canonical, so resolving again is a no-op
        assert_eq!(fs::canonicalize(&dir).unwrap(), dir);
    }

    #[test]
    fn test_process_is_dir_rejects_files_and_missing_paths() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("src");
        fs::write(&file, "not a directory").unwrap();

        assert!(ProcessEnvironment.is_dir(tmp.path()));
        assert!(!ProcessEnvironment.is_dir(&file));
        assert!(!ProcessEnvironment.is_dir(&tmp.path().join("missing")));
    }

    #[test]
    fn test_with_working_dir_overrides_only_the_working_dir() {
        let tmp = TempDir::new().unwrap();
        let env = WithWorkingDir::new(ProcessEnvironment, tmp.path());

        assert_eq!(env.current_dir().unwrap(), tmp.path());
        assert_eq!(env.module_dir(), ProcessEnvironment.module_dir());
        assert!(env.is_dir(tmp.path()));
    }
}
