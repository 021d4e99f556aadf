//! Error types for `quest_journal`.
//!
//! The CLI shares the journal's error type so command handlers can use `?`
//! on store calls directly. `cli::run` lifts everything into `anyhow`.

pub use quest_lib::error::{QuestError, Result};
