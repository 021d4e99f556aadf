//! `quest_journal` - Adventure-themed to-do list manager library
//!
//! This crate provides the command-line front end for the `quest` tool.
//! The journal itself (model, storage, filtering) lives in `quest-lib`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management (YAML, env, flags)
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON, exports)
//! - [`logging`] - `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{QuestError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the journal cannot be written.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
