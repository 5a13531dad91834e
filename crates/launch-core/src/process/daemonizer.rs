//! Daemonized and terminal launches.

use super::spawner::ProcessSpawner;
use super::types::{LaunchConfig, OutputTarget, ProcessHandle, SpawnRequest};
use crate::config::LauncherSettings;
use crate::error::{LaunchError, Result};
use std::fs::File;
use tracing::{info, warn};

/// Launches processes that outlive the launcher.
pub struct Daemonizer<S> {
    spawner: S,
    settings: LauncherSettings,
}

impl<S: ProcessSpawner> Daemonizer<S> {
    pub fn new(spawner: S, settings: LauncherSettings) -> Self {
        Self { spawner, settings }
    }

    /// The spawner used for launches.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Start `config.program` in a new session, detached from the terminal.
    ///
    /// The child runs in `config.working_directory` with stdin on the null
    /// device and output in `config.log_file`. A log file that cannot be
    /// opened is reported and the child runs with its output discarded.
    pub fn daemonize(&self, config: &LaunchConfig) -> Result<ProcessHandle> {
        let (output, log_path) = match config.log_file {
            Some(ref path) => match File::create(path) {
                Ok(file) => (OutputTarget::File(file), Some(path)),
                Err(e) => {
                    let err = LaunchError::LogFileOpenFailed {
                        path: path.clone(),
                        source: e,
                    };
                    warn!("{}; output of {} is discarded", err, config.program.display());
                    (OutputTarget::Null, None)
                }
            },
            None => (OutputTarget::Null, None),
        };

        let request = SpawnRequest::new(&config.program, config.arguments.clone())
            .in_directory(&config.working_directory)
            .detached(output);

        info!(
            "Daemonizing {} in {}",
            config.program.display(),
            config.working_directory.display()
        );
        let handle = self.spawner.spawn(request)?;
        info!("Daemonized process with PID {}", handle.pid());

        Ok(match log_path {
            Some(path) => handle.with_log_file(path),
            None => handle,
        })
    }

    /// Run `config.program` inside a terminal emulator window that stays open
    /// after the program exits.
    ///
    /// The terminal keeps the launcher's session and standard streams.
    pub fn launch_in_terminal(&self, config: &LaunchConfig) -> Result<ProcessHandle> {
        let mut args = self.settings.terminal_args.clone();
        args.push(config.program.display().to_string());
        args.extend(config.arguments.iter().cloned());

        let request = SpawnRequest::new(&self.settings.terminal_program, args)
            .in_directory(&config.working_directory);

        info!(
            "Launching {} in {}",
            config.program.display(),
            self.settings.terminal_program.display()
        );
        self.spawner.spawn(request)
    }
}
