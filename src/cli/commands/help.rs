use clap::{CommandFactory, Parser};
use tracing::warn;

use crate::cli::Cli;
use crate::error::Result;

/// Print help for `topic`, or the command overview.
///
/// Unknown topics fall back to the overview.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn execute(topic: Option<&str>) -> Result<()> {
    let topic = topic.filter(|name| {
        let known = Cli::command().find_subcommand(name).is_some();
        if !known {
            warn!("No help topic named {name:?}");
        }
        known
    });

    let argv = match topic {
        Some(name) => vec!["quest", name, "--help"],
        None => vec!["quest", "--help"],
    };

    // clap renders help by returning it as a DisplayHelp "error".
    if let Err(rendered) = Cli::try_parse_from(argv) {
        rendered.print()?;
    }
    Ok(())
}
