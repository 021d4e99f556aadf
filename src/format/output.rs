use quest_lib::{Quest, QuestStats};
use serde::Serialize;

/// The mutation a command performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Added,
    Discovered,
    Edited,
    Deleted,
}

/// Outcome of a single mutation, found or not.
#[derive(Debug, Clone, Serialize)]
pub struct MutationOutput {
    pub action: Action,
    pub id: i64,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quest: Option<Quest>,
}

impl MutationOutput {
    #[must_use]
    pub fn applied(action: Action, quest: Quest) -> Self {
        Self {
            action,
            id: quest.id,
            found: true,
            quest: Some(quest),
        }
    }

    #[must_use]
    pub const fn not_found(action: Action, id: i64) -> Self {
        Self {
            action,
            id,
            found: false,
            quest: None,
        }
    }
}

/// Aggregate statistics with the derived completion rate.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    #[serde(flatten)]
    pub stats: QuestStats,
    pub completion_rate: f64,
}

impl From<QuestStats> for StatsOutput {
    fn from(stats: QuestStats) -> Self {
        Self {
            completion_rate: stats.completion_rate(),
            stats,
        }
    }
}
