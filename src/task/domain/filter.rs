//! Filter view derivation.

use super::{ParseTaskFilterError, Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter selector offered by the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Pending tasks.
    Pending,
    /// In-progress tasks.
    Active,
    /// Completed tasks.
    Completed,
}

impl TaskFilter {
    /// Every filter, in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::Active, Self::Completed];

    /// Returns the selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns the status selected by this filter, or `None` for
    /// [`TaskFilter::All`].
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(TaskStatus::Pending),
            Self::Active => Some(TaskStatus::InProgress),
            Self::Completed => Some(TaskStatus::Completed),
        }
    }

    /// Returns `true` when `task` belongs to this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        self.status().is_none_or(|status| task.status() == status)
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskFilterError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the tasks selected by `filter`, keeping their input order.
#[must_use]
pub fn visible(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
