//! Core data types for quest-lib.
//!
//! The serde layout is the on-disk contract of `quests.json`: field names and
//! enum spellings must stay readable by every journal written so far.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuestError;

/// Read a JSON `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Quest progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    /// Not yet completed.
    #[default]
    Uncharted,
    /// Completed.
    Discovered,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uncharted => "Uncharted",
            Self::Discovered => "Discovered",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uncharted" => Ok(Self::Uncharted),
            "discovered" => Ok(Self::Discovered),
            _ => Err(QuestError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// Quest priority, ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(QuestError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// A single to-do record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quest {
    /// Unique; the next id is one past the current maximum.
    pub id: i64,

    /// Free-form text. Stored under `quest`, the key existing journals use.
    #[serde(rename = "quest", alias = "description")]
    pub description: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub priority: Priority,

    /// Free-form date text, empty when unset. Not validated.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub due_date: String,
}

impl Quest {
    /// A fresh, uncharted quest.
    #[must_use]
    pub fn new(
        id: i64,
        description: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            status: Status::Uncharted,
            priority,
            due_date: due_date.into(),
        }
    }

    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        if self.due_date.is_empty() {
            None
        } else {
            Some(&self.due_date)
        }
    }
}
