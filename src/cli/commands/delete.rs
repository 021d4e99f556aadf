use quest_lib::QuestStore;

use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::Action;

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the journal cannot be written.
/// An unknown id is reported, not returned as an error.
pub fn execute(id: i64, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let mut store = QuestStore::open(&config.data_file);

    super::report(Action::Deleted, store.delete(id), json)
}
