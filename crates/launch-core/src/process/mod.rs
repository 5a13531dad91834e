//! Process launching, daemonization and relaunch.
//!
//! # Launch modes
//!
//! - **Detached** - fork, start a new session, clear the umask, move to the
//!   working directory, point the standard streams at the log file (or the
//!   null device) and exec. Returns the child's pid immediately.
//! - **Terminal** - run the program inside a terminal emulator window.
//! - **Replace** - exec in place of the current process.
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_core::platform::SystemEnvironment;
//! use launch_core::process::{LaunchConfig, LaunchSupervisor};
//!
//! let supervisor = LaunchSupervisor::from_env(&SystemEnvironment);
//! let config = LaunchConfig::new("/usr/bin/python3")
//!     .with_arg("-m")
//!     .with_arg("http.server")
//!     .with_working_directory("/srv/www")
//!     .with_log_file("/tmp/http.log");
//!
//! let handle = supervisor.run(config)?;
//! println!("PID: {}", handle.pid());
//! # Ok::<(), launch_core::LaunchError>(())
//! ```

mod daemonizer;
mod locator;
mod spawner;
mod supervisor;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use daemonizer::Daemonizer;
pub use locator::{ProcessLocator, ProcfsLocator};
pub use spawner::{OsSpawner, ProcessSpawner};
pub use supervisor::LaunchSupervisor;
pub use types::{
    LaunchConfig, LaunchMode, OutputTarget, ProcessHandle, ProcessLocation, Relaunched,
    SpawnRequest,
};
