//! `quest_journal` (quest) - Adventure-themed to-do list manager
//!
//! Quests live in a single JSON journal file that is rewritten after every change.
//! No daemon, no background processes, no network.

use quest_journal::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
