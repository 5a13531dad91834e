//! Recording stand-ins for the OS collaborators.

use super::locator::ProcessLocator;
use super::spawner::ProcessSpawner;
use super::types::{OutputTarget, ProcessHandle, ProcessLocation, SpawnRequest};
use crate::error::{LaunchError, Result};
use crate::platform::ProcessSignaller;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// What a [`RecordingSpawner`] does with each spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpawnOutcome {
    #[default]
    Succeed,
    ForkFailed,
    SpawnFailed,
}

/// Summary of a request seen by a [`RecordingSpawner`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub program: PathBuf,
    pub arguments: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub detach: bool,
    /// `"inherit"`, `"null"` or `"file"`.
    pub output: &'static str,
    pub replaced: bool,
    /// Pid handed out, 0 if the spawn failed.
    pub pid: u32,
}

#[derive(Debug, Default)]
pub struct RecordingSpawner {
    outcome: SpawnOutcome,
    requests: RefCell<Vec<RecordedRequest>>,
    next_pid: Cell<u32>,
}

impl RecordingSpawner {
    pub fn failing(outcome: SpawnOutcome) -> Self {
        Self {
            outcome,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn record(&self, request: &SpawnRequest, replaced: bool, pid: u32) {
        let output = match request.output {
            OutputTarget::Inherit => "inherit",
            OutputTarget::Null => "null",
            OutputTarget::File(_) => "file",
        };
        self.requests.borrow_mut().push(RecordedRequest {
            program: request.program.clone(),
            arguments: request.arguments.clone(),
            working_directory: request.working_directory.clone(),
            detach: request.detach,
            output,
            replaced,
            pid,
        });
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, request: SpawnRequest) -> Result<ProcessHandle> {
        let program = request.program_name();
        match self.outcome {
            SpawnOutcome::Succeed => {
                let pid = 10_000 + self.next_pid.get();
                self.next_pid.set(self.next_pid.get() + 1);
                self.record(&request, false, pid);
                Ok(ProcessHandle::new(pid))
            }
            SpawnOutcome::ForkFailed => {
                self.record(&request, false, 0);
                Err(LaunchError::ForkFailed {
                    program,
                    source: io::Error::from_raw_os_error(libc::EAGAIN),
                })
            }
            SpawnOutcome::SpawnFailed => {
                self.record(&request, false, 0);
                Err(LaunchError::SpawnFailed {
                    program,
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
            }
        }
    }

    fn replace(&self, request: SpawnRequest) -> LaunchError {
        self.record(&request, true, 0);
        LaunchError::SpawnFailed {
            program: request.program_name(),
            source: io::Error::other("exec is simulated"),
        }
    }
}

/// Locator answering from a scripted list; the last answer repeats.
///
/// `None` answers resolve to `ProcessNotFound`.
#[derive(Debug, Default)]
pub struct StubLocator {
    answers: Vec<Option<ProcessLocation>>,
    calls: Cell<usize>,
}

impl StubLocator {
    pub fn always(location: ProcessLocation) -> Self {
        Self::sequence(vec![Some(location)])
    }

    pub fn missing() -> Self {
        Self::sequence(vec![None])
    }

    pub fn sequence(answers: Vec<Option<ProcessLocation>>) -> Self {
        Self {
            answers,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ProcessLocator for StubLocator {
    fn resolve(&self, pid: u32) -> Result<ProcessLocation> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        let answer = self
            .answers
            .get(call)
            .or_else(|| self.answers.last())
            .cloned()
            .flatten();
        answer.ok_or(LaunchError::ProcessNotFound { pid, source: None })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SignalOutcome {
    #[default]
    Delivered,
    AlreadyExited,
    Failed,
}

#[derive(Debug, Default)]
pub struct RecordingSignaller {
    outcome: SignalOutcome,
    killed: RefCell<Vec<u32>>,
}

impl RecordingSignaller {
    pub fn failing() -> Self {
        Self {
            outcome: SignalOutcome::Failed,
            ..Self::default()
        }
    }

    pub fn already_exited() -> Self {
        Self {
            outcome: SignalOutcome::AlreadyExited,
            ..Self::default()
        }
    }

    /// Pids a signal was actually delivered to.
    pub fn killed(&self) -> Vec<u32> {
        self.killed.borrow().clone()
    }
}

impl ProcessSignaller for RecordingSignaller {
    fn kill(&self, pid: u32) -> Result<bool> {
        match self.outcome {
            SignalOutcome::Delivered => {
                self.killed.borrow_mut().push(pid);
                Ok(true)
            }
            SignalOutcome::AlreadyExited => Ok(false),
            SignalOutcome::Failed => Err(LaunchError::SignalFailed {
                pid,
                signal: "SIGKILL",
                source: io::Error::from_raw_os_error(libc::EPERM),
            }),
        }
    }
}
