//! Command implementations.
//!
//! Each command resolves configuration, opens the journal, runs one store
//! operation, and prints what `crate::format` renders.

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod help;
pub mod list;
pub mod search;
pub mod stats;

use quest_lib::{Quest, QuestError};

use crate::error::Result;
use crate::format::{Action, MutationOutput, format_mutation};

/// Print the outcome of a mutation.
///
/// A missing id is reported like any other outcome and is not an error;
/// every other failure is passed back to the caller.
pub(crate) fn report(action: Action, result: Result<Quest>, json: bool) -> Result<()> {
    let output = match result {
        Ok(quest) => MutationOutput::applied(action, quest),
        Err(QuestError::QuestNotFound { id }) => MutationOutput::not_found(action, id),
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_mutation(&output));
    }
    Ok(())
}
