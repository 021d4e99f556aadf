//! In-memory quest store backed by a JSON journal file.
//!
//! The whole journal is loaded once when the store is opened. Every
//! successful mutation rewrites the file immediately; a mutation that
//! targets a missing id changes nothing and writes nothing.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{QuestError, Result};
use crate::jsonfile;
use crate::model::{Priority, Quest, Status};
use crate::query::{ListFilters, QuestStats};

/// Quest journal store.
///
/// Use `open()` to load from a file; stores built with `new()` live only in
/// memory and never touch disk.
#[derive(Debug, Default)]
pub struct QuestStore {
    quests: Vec<Quest>,
    path: Option<PathBuf>,
}

impl QuestStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty, unbacked store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the journal at `path`.
    ///
    /// A missing file starts an empty journal. Unreadable or malformed
    /// content is also treated as an empty journal; the next save
    /// overwrites it.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let quests = match jsonfile::load(path) {
            Ok(quests) => {
                debug!("Loaded {} quest(s) from {}", quests.len(), path.display());
                quests
            }
            Err(QuestError::FileNotFound(_)) => {
                debug!("No journal at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable journal {}: {}; starting empty",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        Self {
            quests,
            path: Some(path.to_path_buf()),
        }
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save to the file that was opened.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if no file path is set, or `Io` on write failure.
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| QuestError::Storage("No file path set; use save_to()".to_string()))?;
        self.save_to(path)
    }

    /// Save to a specific file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        jsonfile::save(path, &self.quests)?;
        debug!("Saved {} quest(s) to {}", self.quests.len(), path.display());
        Ok(())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// The id the next `add` will assign: one past the largest id, or 1.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the largest id is already `i64::MAX`.
    pub fn next_id(&self) -> Result<i64> {
        match self.quests.iter().map(|q| q.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| QuestError::Storage("id space exhausted".to_string())),
        }
    }

    /// Add a new uncharted quest and persist.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if no id is left, or `Io` if the journal cannot be
    /// written.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Result<Quest> {
        let quest = Quest::new(self.next_id()?, description, priority, due_date);
        self.quests.push(quest.clone());
        self.persist()?;

        info!(id = quest.id, priority = %quest.priority, "Added quest");
        Ok(quest)
    }

    /// Mark a quest discovered and persist.
    ///
    /// # Errors
    ///
    /// Returns `QuestNotFound` if no quest has this id, or `Io` on write failure.
    pub fn complete(&mut self, id: i64) -> Result<Quest> {
        let quest = self.find_mut(id)?;
        quest.status = Status::Discovered;
        let updated = quest.clone();
        self.persist()?;

        info!(id, "Quest discovered");
        Ok(updated)
    }

    /// Replace a quest's description and persist.
    ///
    /// # Errors
    ///
    /// Returns `QuestNotFound` if no quest has this id, or `Io` on write failure.
    pub fn edit(&mut self, id: i64, description: impl Into<String>) -> Result<Quest> {
        let quest = self.find_mut(id)?;
        quest.description = description.into();
        let updated = quest.clone();
        self.persist()?;

        info!(id, "Quest edited");
        Ok(updated)
    }

    /// Remove a quest and persist. Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns `QuestNotFound` if no quest has this id, or `Io` on write failure.
    pub fn delete(&mut self, id: i64) -> Result<Quest> {
        let index = self
            .quests
            .iter()
            .position(|q| q.id == id)
            .ok_or(QuestError::QuestNotFound { id })?;
        let removed = self.quests.remove(index);
        self.persist()?;

        info!(id, "Quest deleted");
        Ok(removed)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Find a quest by id.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// Get a quest by id.
    ///
    /// # Errors
    ///
    /// Returns `QuestNotFound` if no quest has this id.
    pub fn get(&self, id: i64) -> Result<&Quest> {
        self.find(id).ok_or(QuestError::QuestNotFound { id })
    }

    /// List quests matching all present filters, in stored order.
    #[must_use]
    pub fn list(&self, filters: &ListFilters) -> Vec<&Quest> {
        self.quests.iter().filter(|q| filters.matches(q)).collect()
    }

    /// Search quests by description substring (case-insensitive).
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Quest> {
        self.list(&ListFilters {
            description_contains: Some(query.to_string()),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn stats(&self) -> QuestStats {
        QuestStats::from_quests(&self.quests)
    }

    /// All quests, in stored order.
    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn find_mut(&mut self, id: i64) -> Result<&mut Quest> {
        self.quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuestError::QuestNotFound { id })
    }

    fn persist(&self) -> Result<()> {
        if self.path.is_some() {
            self.save()?;
        }
        Ok(())
    }
}
