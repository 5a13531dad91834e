//! Platform abstraction layer.
//!
//! This module centralizes the OS-facing collaborators the launcher depends
//! on, so the orchestration code can be exercised against stubs.
//!
//! # Architecture
//!
//! - `env` - Environment variable access and search-path listing
//! - `process` - Process liveness checks and signal delivery

pub mod env;
pub mod process;

pub use env::{search_path_entries, Environment, SystemEnvironment};
pub use process::{is_process_alive, NixSignaller, ProcessSignaller};
