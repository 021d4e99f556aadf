use quest_lib::QuestStore;

use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::{StatsOutput, format_stats};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or JSON output fails.
pub fn execute(json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let store = QuestStore::open(&config.data_file);
    let stats = store.stats();

    if json {
        let output = StatsOutput::from(stats);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_stats(&stats));
    }

    Ok(())
}
