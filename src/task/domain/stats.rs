//! Per-status task counts for the profile page and filter badges.

use super::{Task, TaskFilter, TaskStatus};
use serde::{Deserialize, Serialize};

/// Task counts for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Number of in-progress tasks.
    pub in_progress: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskStatistics {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }

    /// Returns the number of tasks a filter would show.
    #[must_use]
    pub const fn count_for(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.total,
            TaskFilter::Pending => self.pending,
            TaskFilter::Active => self.in_progress,
            TaskFilter::Completed => self.completed,
        }
    }
}
