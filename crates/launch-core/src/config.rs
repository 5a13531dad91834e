//! Centralized configuration for the launcher.
//!
//! Constants live on unit structs grouped by concern. The only runtime knob is
//! the terminal emulator, which [`LauncherSettings::from_env`] reads through an
//! injected [`Environment`].

use crate::platform::Environment;
use std::path::PathBuf;

/// Defaults applied when a launch request leaves a field unset.
pub struct LaunchDefaults;

impl LaunchDefaults {
    pub const WORKING_DIRECTORY: &'static str = ".";
    pub const SEARCH_PATH_VAR: &'static str = "PATH";
    pub const TERMINAL_PROGRAM: &'static str = "xterm";
    /// Keep the window open after the program exits, then run the program.
    pub const TERMINAL_ARGS: [&'static str; 2] = ["-hold", "-e"];
    pub const TERMINAL_ENV_VAR: &'static str = "LAUNCH_TERMINAL";
}

/// Location of the per-process metadata tree.
pub struct ProcfsConfig;

impl ProcfsConfig {
    pub const ROOT: &'static str = "/proc";
    pub const EXE_LINK: &'static str = "exe";
    pub const CWD_LINK: &'static str = "cwd";
}

/// Runtime settings for a launcher instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Terminal emulator used by terminal launches.
    pub terminal_program: PathBuf,
    /// Arguments placed between the terminal program and the launched program.
    pub terminal_args: Vec<String>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            terminal_program: PathBuf::from(LaunchDefaults::TERMINAL_PROGRAM),
            terminal_args: LaunchDefaults::TERMINAL_ARGS
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
        }
    }
}

impl LauncherSettings {
    /// Build settings, honouring a `LAUNCH_TERMINAL` override.
    ///
    /// An empty override is ignored.
    pub fn from_env(env: &dyn Environment) -> Self {
        let mut settings = Self::default();
        if let Some(terminal) = env
            .var_os(LaunchDefaults::TERMINAL_ENV_VAR)
            .filter(|value| !value.is_empty())
        {
            settings.terminal_program = PathBuf::from(terminal);
        }
        settings
    }
}
