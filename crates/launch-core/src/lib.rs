//! Launch Core - process launching, daemonization and relaunch-by-pid.
//!
//! This crate holds everything the `launch` CLI does, without the CLI:
//!
//! - [`process::LaunchSupervisor`] picks between exec-in-place, terminal and
//!   daemonized launches, and relaunches a live process by pid.
//! - [`process::Daemonizer`] detaches children from the session and redirects
//!   their output.
//! - [`process::ProcfsLocator`] resolves a pid's executable and working
//!   directory.
//! - [`platform`] holds the signal and environment collaborators.
//!
//! All OS access sits behind the [`process::ProcessSpawner`],
//! [`process::ProcessLocator`], [`platform::ProcessSignaller`] and
//! [`platform::Environment`] traits.

#[cfg(not(unix))]
compile_error!("launch-core supports Unix-like systems only");

pub mod config;
pub mod error;
pub mod platform;
pub mod process;

pub use config::LauncherSettings;
pub use error::{LaunchError, Result};
pub use process::{
    LaunchConfig, LaunchMode, LaunchSupervisor, ProcessHandle, ProcessLocation, Relaunched,
};
