use quest_lib::QuestStore;

use crate::cli::SearchArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or JSON output fails.
pub fn execute(args: &SearchArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let store = QuestStore::open(&config.data_file);

    let quests = store.search(&args.query);
    let empty_message = format!("No quests mention \"{}\".", args.query);
    super::list::print_quests(&quests, json, &empty_message)
}
