//! Environment variable access.
//!
//! Reads go through the [`Environment`] trait rather than `std::env` directly
//! so commands that depend on the environment can be tested with a fixed map.

use crate::config::LaunchDefaults;
use std::ffi::OsString;
use std::path::PathBuf;

/// Source of environment variables.
pub trait Environment {
    /// Look up a variable, returning `None` when it is unset.
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// List the directories of the search-path variable, in order.
///
/// An unset variable yields no entries.
pub fn search_path_entries(env: &dyn Environment) -> Vec<PathBuf> {
    env.var_os(LaunchDefaults::SEARCH_PATH_VAR)
        .map(|value| std::env::split_paths(&value).collect())
        .unwrap_or_default()
}
