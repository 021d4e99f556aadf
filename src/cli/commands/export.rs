//! Export command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use quest_lib::QuestStore;
use tracing::info;

use crate::cli::ExportArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::{ExportFormat, render_export};

/// Output path meaning "write to stdout".
const STDOUT_PATH: &str = "-";

/// Execute the export command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the export cannot be written.
pub fn execute(args: &ExportArgs, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let store = QuestStore::open(&config.data_file);

    let rendered = render_export(args.format, store.quests())?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(args.format));

    if output == Path::new(STDOUT_PATH) {
        print!("{rendered}");
        return Ok(());
    }

    fs::write(&output, rendered)?;
    info!("Exported {} quest(s) to {}", store.len(), output.display());
    println!(
        "Exported {} quest(s) to {}",
        store.len(),
        output.display()
    );
    Ok(())
}

fn default_output(format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("quests_export.{}", format.extension()))
}
