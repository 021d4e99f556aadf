//! List command implementation.
//!
//! Shows the journal as a table, optionally narrowed by status and priority.

use quest_lib::{ListFilters, Quest, QuestStore};

use crate::cli::ListArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::format_table;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or JSON output fails.
pub fn execute(args: &ListArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let config = config::load(overrides)?;
    let store = QuestStore::open(&config.data_file);

    let filters = build_filters(args);
    let quests = store.list(&filters);

    let empty_message = if store.is_empty() {
        "No quests in the journal."
    } else {
        "No quests match the filter."
    };
    print_quests(&quests, json, empty_message)
}

/// Convert CLI args to store filters.
fn build_filters(args: &ListArgs) -> ListFilters {
    ListFilters {
        status: args.status,
        priority: args.priority,
        ..Default::default()
    }
}

/// Print quests as a table (or JSON array), with a count footer.
pub(crate) fn print_quests(quests: &[&Quest], json: bool, empty_message: &str) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(quests)?;
        println!("{json_output}");
    } else if quests.is_empty() {
        println!("{empty_message}");
    } else {
        print!("{}", format_table(quests));
        println!("\n{} quest(s)", quests.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_lib::{Priority, Status};

    #[test]
    fn test_build_filters_copies_both_options() {
        let args = ListArgs {
            status: Some(Status::Discovered),
            priority: Some(Priority::High),
        };
        let filters = build_filters(&args);
        assert_eq!(filters.status, Some(Status::Discovered));
        assert_eq!(filters.priority, Some(Priority::High));
        assert!(filters.description_contains.is_none());
    }

    #[test]
    fn test_build_filters_empty() {
        assert!(build_filters(&ListArgs::default()).is_empty());
    }
}
