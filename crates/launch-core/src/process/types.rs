//! Launch requests and the values produced by launching.

use crate::config::LaunchDefaults;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Configuration for one launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Program to run, either a path or a name looked up in `PATH`.
    pub program: PathBuf,
    /// Arguments passed after the program name.
    pub arguments: Vec<String>,
    /// Working directory of the launched process.
    pub working_directory: PathBuf,
    /// File receiving the launched process's output.
    pub log_file: Option<PathBuf>,
    /// Run inside a terminal emulator window.
    pub run_in_terminal: bool,
    /// Replace the current process image instead of forking.
    pub replace_current_process: bool,
}

impl LaunchConfig {
    /// Create a config that daemonizes `program` in the current directory.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            arguments: vec![],
            working_directory: PathBuf::from(LaunchDefaults::WORKING_DIRECTORY),
            log_file: None,
            run_in_terminal: false,
            replace_current_process: false,
        }
    }

    /// Set the arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.arguments = args;
        self
    }

    /// Add an argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Set the working directory.
    pub fn with_working_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_directory = dir.as_ref().to_path_buf();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Run the program inside a terminal emulator.
    pub fn in_terminal(mut self, flag: bool) -> Self {
        self.run_in_terminal = flag;
        self
    }

    /// Replace the current process with the program.
    pub fn replacing_current(mut self, flag: bool) -> Self {
        self.replace_current_process = flag;
        self
    }

    /// The launch branch this config selects.
    ///
    /// Replacing the current process wins over a terminal launch.
    pub fn mode(&self) -> LaunchMode {
        if self.replace_current_process {
            LaunchMode::Replace
        } else if self.run_in_terminal {
            LaunchMode::Terminal
        } else {
            LaunchMode::Detached
        }
    }
}

/// How a launch request is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Exec in place of the current process.
    Replace,
    /// Run inside a terminal emulator window.
    Terminal,
    /// Fork, detach from the session and exec.
    Detached,
}

/// A process created by a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    pid: u32,
    log_file: Option<PathBuf>,
}

impl ProcessHandle {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            log_file: None,
        }
    }

    /// Record the file the process's output is redirected to.
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// The log file receiving output, if redirection is in effect.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Executable and working directory of a live process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessLocation {
    pub executable_path: PathBuf,
    pub working_directory: PathBuf,
}

/// Outcome of a successful relaunch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relaunched {
    /// Pid of the process that was killed.
    pub previous_pid: u32,
    /// The replacement process.
    pub handle: ProcessHandle,
    /// Where the replacement was started from.
    pub location: ProcessLocation,
}

/// Where a spawned process's standard streams point.
#[derive(Debug)]
pub enum OutputTarget {
    /// Keep the parent's streams.
    Inherit,
    /// Bind all three streams to the null device.
    Null,
    /// Send stdout and stderr to the file; stdin reads from the null device.
    File(File),
}

/// A fully resolved request handed to a [`ProcessSpawner`](super::ProcessSpawner).
#[derive(Debug)]
pub struct SpawnRequest {
    pub program: PathBuf,
    pub arguments: Vec<String>,
    pub working_directory: Option<PathBuf>,
    /// Start a new session and clear the umask before exec.
    pub detach: bool,
    pub output: OutputTarget,
}

impl SpawnRequest {
    /// A request that runs `program` with the caller's streams and session.
    pub fn new(program: impl AsRef<Path>, arguments: Vec<String>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            arguments,
            working_directory: None,
            detach: false,
            output: OutputTarget::Inherit,
        }
    }

    pub fn in_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn detached(mut self, output: OutputTarget) -> Self {
        self.detach = true;
        self.output = output;
        self
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}
