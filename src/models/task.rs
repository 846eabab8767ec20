//! Task model
//!
//! A task is the unit of work tracked by the list: a short text description,
//! a completion flag, and the time it was created. Tasks are only ever
//! constructed by the engine, which issues their ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque task identifier issued by the engine
///
/// Ids are unique for the lifetime of an engine and are never reissued,
/// even after the task they named has been deleted. Callers may use them
/// as stable keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value of this id
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "3" as well as the "#3" form the list rendering shows
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid task id: {s}. Use a number, e.g. 3 or #3"))
    }
}

/// A task - a single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (engine-issued, never reused)
    pub id: TaskId,

    /// What needs to be done
    pub content: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// When this task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given id and content
    ///
    /// New tasks start incomplete, with `created_at` captured at the moment
    /// of the call.
    #[must_use]
    pub fn new(id: TaskId, content: String) -> Self {
        Self {
            id,
            content,
            completed: false,
            created_at: Utc::now(),
        }
    }
}
