//! Resolving a live process's executable and working directory.

use super::types::ProcessLocation;
use crate::config::ProcfsConfig;
use crate::error::{LaunchError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looks up where a running process came from.
pub trait ProcessLocator {
    /// Resolve the executable and working directory of `pid`.
    ///
    /// Both must resolve; otherwise the process counts as not found.
    fn resolve(&self, pid: u32) -> Result<ProcessLocation>;
}

/// Locator reading the `exe` and `cwd` links of a procfs tree.
#[derive(Debug, Clone)]
pub struct ProcfsLocator {
    proc_root: PathBuf,
}

impl Default for ProcfsLocator {
    fn default() -> Self {
        Self::new(ProcfsConfig::ROOT)
    }
}

impl ProcfsLocator {
    pub fn new(proc_root: impl AsRef<Path>) -> Self {
        Self {
            proc_root: proc_root.as_ref().to_path_buf(),
        }
    }

    fn resolve_link(&self, pid: u32, link: &str) -> Result<PathBuf> {
        let path = self.proc_root.join(pid.to_string()).join(link);
        fs::canonicalize(&path).map_err(|e| {
            debug!("Cannot resolve {}: {}", path.display(), e);
            LaunchError::not_found(pid, e)
        })
    }
}

impl ProcessLocator for ProcfsLocator {
    fn resolve(&self, pid: u32) -> Result<ProcessLocation> {
        let executable_path = self.resolve_link(pid, ProcfsConfig::EXE_LINK)?;
        let working_directory = self.resolve_link(pid, ProcfsConfig::CWD_LINK)?;

        debug!(
            "Process {} runs {} in {}",
            pid,
            executable_path.display(),
            working_directory.display()
        );
        Ok(ProcessLocation {
            executable_path,
            working_directory,
        })
    }
}
