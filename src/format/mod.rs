//! Output formatting for `quest_journal`.
//!
//! Every function here turns data into a string; printing is left to the
//! command handlers. Supports human-readable text, JSON, and export files.
//!
//! # JSON Output Types
//!
//! - [`MutationOutput`] - Result of add/done/edit/delete
//! - [`StatsOutput`] - Aggregate stats (stats)

mod export;
mod output;
mod text;

pub use export::{ExportFormat, render_export};
pub use output::{Action, MutationOutput, StatsOutput};
pub use text::{
    format_due, format_mutation, format_quest_line, format_stats, format_status, format_table,
};
