//! Scoped switch of the process working directory

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Switches the working directory on [`WorkingDir::enter`] and switches back on drop
///
/// Restoration happens on every exit path, including early returns and
/// unwinding. The working directory is process-wide, so only one guard
/// should be alive at a time.
#[derive(Debug)]
pub struct WorkingDir {
    previous: PathBuf,
}

impl WorkingDir {
    /// Enter `path`, remembering the current directory
    pub fn enter(path: &Utf8Path) -> Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path).map_err(|source| Error::WorkingDirectory {
            path: path.to_string(),
            source,
        })?;

        debug!("Entered {} (was {})", path, previous.display());
        Ok(Self { previous })
    }

    /// Directory restored on drop
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            warn!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}
