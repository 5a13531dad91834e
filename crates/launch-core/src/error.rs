//! Error types for the launcher.
//!
//! Every variant maps to one phase of a launch or relaunch so callers can tell
//! exactly which step failed. Only the CLI decides how these are shown to the
//! user and which exit code they produce.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launch operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    // Process creation errors
    #[error("Unable to spawn process and launch {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to fork process and launch {program}: {source}")]
    ForkFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file {path}: {source}")]
    LogFileOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process lookup errors
    #[error("Process of pid <{pid}> not found")]
    ProcessNotFound {
        pid: u32,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Process {pid} changed executable from {expected} to {actual}")]
    ProcessChanged {
        pid: u32,
        expected: PathBuf,
        actual: PathBuf,
    },

    // Termination errors
    #[error("Failed to send {signal} to process {pid}: {source}")]
    SignalFailed {
        pid: u32,
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to relaunch process {pid}: {source}")]
    RelaunchFailed {
        pid: u32,
        #[source]
        source: Box<LaunchError>,
    },
}

/// Result type alias for launch operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

impl LaunchError {
    /// Create a `ProcessNotFound` error carrying the lookup failure.
    pub fn not_found(pid: u32, err: std::io::Error) -> Self {
        LaunchError::ProcessNotFound {
            pid,
            source: Some(err),
        }
    }

    /// Whether the error left the system worse off than before the call.
    ///
    /// Only a failed respawn after the original process was killed qualifies:
    /// the old process is gone and nothing replaced it.
    pub fn is_destructive(&self) -> bool {
        matches!(self, LaunchError::RelaunchFailed { .. })
    }

    /// The pid the error refers to, if any.
    pub fn pid(&self) -> Option<u32> {
        match self {
            LaunchError::ProcessNotFound { pid, .. }
            | LaunchError::ProcessChanged { pid, .. }
            | LaunchError::SignalFailed { pid, .. }
            | LaunchError::RelaunchFailed { pid, .. } => Some(*pid),
            _ => None,
        }
    }
}
