use quest_lib::QuestStore;

use crate::cli::EditArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::Action;

/// Execute the edit command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the journal cannot be written.
/// An unknown id is reported, not returned as an error.
pub fn execute(args: &EditArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let mut store = QuestStore::open(&config.data_file);

    let result = store.edit(args.id, args.description.clone());
    super::report(Action::Edited, result, json)
}
