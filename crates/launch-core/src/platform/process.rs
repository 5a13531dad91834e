//! Process liveness checks and signal delivery.

use crate::error::{LaunchError, Result};
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::debug;

/// Delivers termination signals to processes by pid.
pub trait ProcessSignaller {
    /// Forcefully terminate `pid` without a grace period.
    ///
    /// Returns `Ok(false)` if the process no longer existed when the signal
    /// was sent.
    fn kill(&self, pid: u32) -> Result<bool>;
}

/// Signaller backed by `kill(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NixSignaller;

impl ProcessSignaller for NixSignaller {
    fn kill(&self, pid: u32) -> Result<bool> {
        let nix_pid = to_nix_pid(pid).ok_or_else(|| LaunchError::SignalFailed {
            pid,
            signal: "SIGKILL",
            source: std::io::Error::from(Errno::EINVAL),
        })?;

        debug!("Sending SIGKILL to process {}", pid);
        match kill(nix_pid, Signal::SIGKILL) {
            Ok(()) => Ok(true),
            Err(Errno::ESRCH) => {
                debug!("Process {} already exited", pid);
                Ok(false)
            }
            Err(e) => Err(LaunchError::SignalFailed {
                pid,
                signal: "SIGKILL",
                source: std::io::Error::from(e),
            }),
        }
    }
}

/// Check if a process with the given PID is alive.
///
/// Uses `kill(pid, 0)`, which only checks that the process exists. A zombie
/// still counts as alive until it is reaped.
pub fn is_process_alive(pid: u32) -> bool {
    match to_nix_pid(pid) {
        // EPERM means the process exists but belongs to someone else
        Some(nix_pid) => matches!(kill(nix_pid, None), Ok(()) | Err(Errno::EPERM)),
        None => false,
    }
}

/// Pids 0 and anything above `i32::MAX` address process groups or nothing at
/// all, never a single process.
fn to_nix_pid(pid: u32) -> Option<Pid> {
    match i32::try_from(pid) {
        Ok(raw) if raw > 0 => Some(Pid::from_raw(raw)),
        _ => None,
    }
}
