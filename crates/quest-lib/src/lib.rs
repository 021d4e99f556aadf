//! `quest-lib` - In-process quest journal library.
//!
//! Loads the whole journal (a JSON array of quests) into memory, applies one
//! mutation at a time, and rewrites the file after each one.
//!
//! # Quick Start
//!
//! ```no_run
//! use quest_lib::{ListFilters, Priority, QuestStore, Status};
//!
//! // Load existing file (missing or malformed files start empty)
//! let mut store = QuestStore::open("quests.json");
//!
//! // Create; the file is rewritten immediately
//! let quest = store.add("Find the idol", Priority::High, "").unwrap();
//!
//! // Complete
//! store.complete(quest.id).unwrap();
//!
//! // Query
//! let found = store.list(&ListFilters {
//!     status: Some(Status::Discovered),
//!     ..Default::default()
//! });
//! assert_eq!(found.len(), 1);
//! ```

pub mod error;
pub mod jsonfile;
pub mod model;
pub mod query;
pub mod store;

pub use error::{QuestError, Result};
pub use model::{Priority, Quest, Status};
pub use query::{ListFilters, QuestStats};
pub use store::QuestStore;
