//! Orchestration of launch and relaunch requests.
//!
//! # Relaunch
//!
//! Relaunching runs four phases, each failing with its own error:
//!
//! 1. **Resolve** the executable and working directory (`ProcessNotFound`)
//! 2. **Verify** the pid still runs the same executable (`ProcessNotFound`,
//!    `ProcessChanged`)
//! 3. **Terminate** with `SIGKILL` (`SignalFailed`)
//! 4. **Respawn** daemonized from the resolved location (`RelaunchFailed`)
//!
//! Nothing is signalled unless phases 1 and 2 succeed. The pid can still be
//! reused by the OS between phase 2 and phase 3.

use super::daemonizer::Daemonizer;
use super::locator::{ProcessLocator, ProcfsLocator};
use super::spawner::{OsSpawner, ProcessSpawner};
use super::types::{LaunchConfig, LaunchMode, ProcessHandle, Relaunched, SpawnRequest};
use crate::config::LauncherSettings;
use crate::error::{LaunchError, Result};
use crate::platform::{Environment, NixSignaller, ProcessSignaller};
use tracing::{debug, error, info, warn};

/// Entry point for launching and relaunching processes.
pub struct LaunchSupervisor<S = OsSpawner, L = ProcfsLocator, K = NixSignaller> {
    daemonizer: Daemonizer<S>,
    locator: L,
    signaller: K,
}

impl LaunchSupervisor {
    /// Supervisor wired to the real OS, with settings read from `env`.
    pub fn from_env(env: &dyn Environment) -> Self {
        Self::new(
            Daemonizer::new(OsSpawner, LauncherSettings::from_env(env)),
            ProcfsLocator::default(),
            NixSignaller,
        )
    }
}

impl<S, L, K> LaunchSupervisor<S, L, K>
where
    S: ProcessSpawner,
    L: ProcessLocator,
    K: ProcessSignaller,
{
    pub fn new(daemonizer: Daemonizer<S>, locator: L, signaller: K) -> Self {
        Self {
            daemonizer,
            locator,
            signaller,
        }
    }

    pub fn daemonizer(&self) -> &Daemonizer<S> {
        &self.daemonizer
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn signaller(&self) -> &K {
        &self.signaller
    }

    /// Launch a program according to its [`LaunchMode`].
    ///
    /// In [`LaunchMode::Replace`] this only returns if the exec failed.
    pub fn run(&self, config: LaunchConfig) -> Result<ProcessHandle> {
        match config.mode() {
            LaunchMode::Replace => {
                info!("Executing {} in place", config.program.display());
                let request = SpawnRequest::new(&config.program, config.arguments)
                    .in_directory(&config.working_directory);
                Err(self.daemonizer.spawner().replace(request))
            }
            LaunchMode::Terminal => self.daemonizer.launch_in_terminal(&config),
            LaunchMode::Detached => self.daemonizer.daemonize(&config),
        }
    }

    /// Kill `pid` and start its executable again from its working directory.
    pub fn relaunch(&self, pid: u32) -> Result<Relaunched> {
        let location = self.locator.resolve(pid)?;

        // Re-check right before signalling so a recycled pid is left alone
        let current = self.locator.resolve(pid)?;
        if current.executable_path != location.executable_path {
            warn!(
                "Process {} no longer runs {}, not relaunching",
                pid,
                location.executable_path.display()
            );
            return Err(LaunchError::ProcessChanged {
                pid,
                expected: location.executable_path,
                actual: current.executable_path,
            });
        }

        if self.signaller.kill(pid)? {
            info!("Killed process {}", pid);
        } else {
            debug!("Process {} exited before it could be killed", pid);
        }

        let config = LaunchConfig::new(&location.executable_path)
            .with_working_directory(&location.working_directory);
        let handle = self.daemonizer.daemonize(&config).map_err(|e| {
            error!(
                "Process {} was killed but {} could not be restarted: {}",
                pid,
                location.executable_path.display(),
                e
            );
            LaunchError::RelaunchFailed {
                pid,
                source: Box::new(e),
            }
        })?;

        info!("Relaunched process {} as {}", pid, handle.pid());
        Ok(Relaunched {
            previous_pid: pid,
            handle,
            location,
        })
    }
}
