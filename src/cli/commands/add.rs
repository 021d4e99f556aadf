use quest_lib::QuestStore;

use crate::cli::AddArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::Action;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the journal cannot be written.
pub fn execute(args: &AddArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let mut store = QuestStore::open(&config.data_file);

    let priority = args.priority.unwrap_or(config.default_priority);
    let due = args.due.clone().unwrap_or_default();

    let result = store.add(args.description.clone(), priority, due);
    super::report(Action::Added, result, json)
}
