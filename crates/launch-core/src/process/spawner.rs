//! Process creation: fork-style spawn and exec-style replace.

// The session detach hook runs between fork and exec and has to call libc.
#![allow(unsafe_code)]

use super::types::{OutputTarget, ProcessHandle, SpawnRequest};
use crate::error::{LaunchError, Result};
use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Creates processes from a [`SpawnRequest`].
pub trait ProcessSpawner {
    /// Start a new process and return without waiting for it.
    fn spawn(&self, request: SpawnRequest) -> Result<ProcessHandle>;

    /// Replace the current process image with the requested program.
    ///
    /// Never returns on success, so the return value is always the error that
    /// prevented the exec.
    fn replace(&self, request: SpawnRequest) -> LaunchError;
}

/// Spawner backed by `fork`/`exec` through [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSpawner;

impl OsSpawner {
    fn build_command(request: SpawnRequest) -> Result<Command> {
        let program = request.program_name();
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.arguments);

        if let Some(ref dir) = request.working_directory {
            cmd.current_dir(dir);
        }

        match request.output {
            OutputTarget::Inherit => {}
            OutputTarget::Null => {
                cmd.stdin(Stdio::null());
                cmd.stdout(Stdio::null());
                cmd.stderr(Stdio::null());
            }
            OutputTarget::File(file) => {
                let stderr_file = file
                    .try_clone()
                    .map_err(|e| LaunchError::SpawnFailed {
                        program: program.clone(),
                        source: e,
                    })?;
                cmd.stdin(Stdio::null());
                cmd.stdout(Stdio::from(file));
                cmd.stderr(Stdio::from(stderr_file));
            }
        }

        if request.detach {
            // SAFETY: setsid() and umask() are async-signal-safe and only
            // touch the forked child's own process state.
            unsafe {
                cmd.pre_exec(|| {
                    if libc::setsid() == -1 {
                        return Err(io::Error::last_os_error());
                    }
                    libc::umask(0);
                    Ok(())
                });
            }
        }

        Ok(cmd)
    }
}

impl ProcessSpawner for OsSpawner {
    fn spawn(&self, request: SpawnRequest) -> Result<ProcessHandle> {
        let program = request.program_name();
        debug!(
            "Spawning {} {:?} (detach: {})",
            program, request.arguments, request.detach
        );

        let mut cmd = Self::build_command(request)?;
        let child = cmd.spawn().map_err(|e| {
            error!("Failed to spawn {}: {}", program, e);
            classify_spawn_error(program.clone(), e)
        })?;

        // The child is not waited on; it outlives this handle.
        let pid = child.id();
        debug!("Spawned {} with PID {}", program, pid);
        Ok(ProcessHandle::new(pid))
    }

    fn replace(&self, request: SpawnRequest) -> LaunchError {
        let program = request.program_name();
        let mut cmd = match Self::build_command(request) {
            Ok(cmd) => cmd,
            Err(e) => return e,
        };

        debug!("Replacing current process with {}", program);
        let err = cmd.exec();
        error!("Failed to exec {}: {}", program, err);
        LaunchError::SpawnFailed {
            program,
            source: err,
        }
    }
}

/// Resource exhaustion while duplicating the process is a fork failure;
/// everything else means the program itself could not be started.
fn classify_spawn_error(program: String, err: io::Error) -> LaunchError {
    match err.raw_os_error() {
        Some(libc::EAGAIN) | Some(libc::ENOMEM) => LaunchError::ForkFailed {
            program,
            source: err,
        },
        _ => LaunchError::SpawnFailed {
            program,
            source: err,
        },
    }
}
