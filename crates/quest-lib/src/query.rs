//! Query and filter types for quest listing.

use serde::Serialize;

use crate::model::{Priority, Quest, Status};

/// Filter options for listing quests. Present filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Case-insensitive substring of the description.
    pub description_contains: Option<String>,
}

impl ListFilters {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.description_contains.is_none()
    }

    /// Whether `quest` passes every present filter.
    ///
    /// Enum filters compare the textual forms case-insensitively, the same
    /// check a hand-edited journal would get.
    #[must_use]
    pub fn matches(&self, quest: &Quest) -> bool {
        if let Some(status) = self.status {
            if !quest.status.as_str().eq_ignore_ascii_case(status.as_str()) {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if !quest
                .priority
                .as_str()
                .eq_ignore_ascii_case(priority.as_str())
            {
                return false;
            }
        }

        if let Some(ref query) = self.description_contains {
            if !quest
                .description
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

/// Aggregate counts over the journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuestStats {
    pub total: usize,
    pub uncharted: usize,
    pub discovered: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl QuestStats {
    #[must_use]
    pub fn from_quests<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Self {
        let mut stats = Self::default();
        for quest in quests {
            stats.total += 1;
            match quest.status {
                Status::Uncharted => stats.uncharted += 1,
                Status::Discovered => stats.discovered += 1,
            }
            match quest.priority {
                Priority::Low => stats.low += 1,
                Priority::Medium => stats.medium += 1,
                Priority::High => stats.high += 1,
            }
        }
        stats
    }

    /// Percentage of discovered quests, 0 for an empty journal.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.discovered as f64 * 100.0 / self.total as f64
        }
    }

    #[must_use]
    pub const fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}
