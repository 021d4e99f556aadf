//! Command-line interface for `quest_journal`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use quest_lib::{Priority, QuestError, Status};
use tracing::warn;

use crate::config::CliOverrides;
use crate::format::ExportFormat;
use crate::logging;

/// quest - Adventure-themed to-do list manager.
#[derive(Parser, Debug)]
#[command(name = "quest")]
#[command(
    author,
    version,
    about = "Adventure-themed to-do list manager (JSON journal)",
    long_about = None,
    disable_help_subcommand = true,
    after_help = "Quests are kept in quests.json in the working directory unless --file or a config file says otherwise."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Journal file to read and write
    #[arg(long, global = true, env = "QUEST_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// YAML config file (default: .quest.yaml if present)
    #[arg(long, global = true, env = "QUEST_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new quest
    Add(AddArgs),

    /// List quests
    List(ListArgs),

    /// Mark a quest as discovered (completed)
    Done(IdArgs),

    /// Replace a quest's description
    Edit(EditArgs),

    /// Delete a quest
    Delete(IdArgs),

    /// Search quest descriptions
    Search(SearchArgs),

    /// Show completion statistics
    Stats,

    /// Export the journal as JSON, CSV or text
    Export(ExportArgs),

    /// Show help for all commands or one command
    Help(HelpArgs),

    /// Anything else falls back to help
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Quest description
    pub description: String,

    /// Quest priority: Low, Medium or High (default from config, else Medium)
    #[arg(long, short, value_name = "PRIORITY", value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Due date (free-form, e.g. 2025-12-31)
    #[arg(long, value_name = "DATE")]
    pub due: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status: Uncharted or Discovered
    #[arg(long, short, value_name = "STATUS", value_parser = parse_status)]
    pub status: Option<Status>,

    /// Filter by priority: Low, Medium or High
    #[arg(long, short, value_name = "PRIORITY", value_parser = parse_priority)]
    pub priority: Option<Priority>,
}

#[derive(Args, Debug, Default)]
pub struct IdArgs {
    /// Quest ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Quest ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    /// New quest description
    pub description: String,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub query: String,
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Export file format
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output path ("-" for stdout) [default: quests_export.<format>]
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct HelpArgs {
    /// Command to describe
    pub command: Option<String>,
}

fn parse_priority(value: &str) -> std::result::Result<Priority, String> {
    value.parse().map_err(|e: QuestError| e.to_string())
}

fn parse_status(value: &str) -> std::result::Result<Status, String> {
    value.parse().map_err(|e: QuestError| e.to_string())
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let overrides = CliOverrides {
        file: cli.file,
        config: cli.config,
    };

    match cli.command {
        Some(Commands::Add(args)) => commands::add::execute(&args, cli.json, &overrides)?,
        Some(Commands::List(args)) => commands::list::execute(&args, cli.json, &overrides)?,
        Some(Commands::Done(args)) => commands::done::execute(args.id, cli.json, &overrides)?,
        Some(Commands::Edit(args)) => commands::edit::execute(&args, cli.json, &overrides)?,
        Some(Commands::Delete(args)) => commands::delete::execute(args.id, cli.json, &overrides)?,
        Some(Commands::Search(args)) => commands::search::execute(&args, cli.json, &overrides)?,
        Some(Commands::Stats) => commands::stats::execute(cli.json, &overrides)?,
        Some(Commands::Export(args)) => commands::export::execute(&args, &overrides)?,
        Some(Commands::Help(args)) => commands::help::execute(args.command.as_deref())?,
        Some(Commands::External(argv)) => {
            warn!("Unknown command {:?}", argv.first());
            commands::help::execute(None)?;
        }
        None => commands::help::execute(None)?,
    }

    Ok(())
}
