//! Task status machine.
//!
//! Three states cycle as pending → in-progress → completed → in-progress.
//! Pending is only left through `start`, and is never re-entered.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Resolves an event against this status.
    ///
    /// Returns `None` when the event is not defined here. [`TaskEvent::Toggle`]
    /// resolves from every status.
    #[must_use]
    pub const fn resolve(self, event: TaskEvent) -> Option<TaskTransition> {
        match (self, event) {
            (Self::Pending, TaskEvent::Start | TaskEvent::Toggle) => Some(TaskTransition::Start),
            (Self::InProgress, TaskEvent::Complete | TaskEvent::Toggle) => {
                Some(TaskTransition::Complete)
            }
            (Self::Completed, TaskEvent::Toggle) => Some(TaskTransition::Reopen),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing events accepted by the status machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEvent {
    /// Begin work on a pending task.
    Start,
    /// Finish an in-progress task.
    Complete,
    /// Advance to the next status in the cycle.
    Toggle,
}

impl TaskEvent {
    /// Returns the event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for TaskEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete transition selected for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskTransition {
    /// pending → in-progress; stamps `started_at`.
    Start,
    /// in-progress → completed; stamps `completed_at`.
    Complete,
    /// completed → in-progress; clears `completed_at`.
    Reopen,
}

impl TaskTransition {
    /// Returns the status the transition leads to.
    #[must_use]
    pub const fn target(self) -> TaskStatus {
        match self {
            Self::Start | Self::Reopen => TaskStatus::InProgress,
            Self::Complete => TaskStatus::Completed,
        }
    }
}
