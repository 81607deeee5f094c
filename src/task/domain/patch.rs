//! Partial task updates sent to the store.

use super::{OrderIndex, Task, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};

/// Partial set of task fields to write.
///
/// Nullable timestamps use `Option<Option<_>>`: the outer `None` leaves the
/// column alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<TaskTitle>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New start timestamp.
    pub started_at: Option<Option<DateTime<Utc>>>,
    /// New completion timestamp.
    pub completed_at: Option<Option<DateTime<Utc>>>,
    /// New order index.
    pub order: Option<OrderIndex>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch carrying the lifecycle fields of `task`: status and
    /// both lifecycle timestamps.
    #[must_use]
    pub const fn lifecycle(task: &Task) -> Self {
        Self {
            title: None,
            status: Some(task.status()),
            started_at: Some(task.started_at()),
            completed_at: Some(task.completed_at()),
            order: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the order index.
    #[must_use]
    pub const fn with_order(mut self, order: OrderIndex) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns `true` when the patch writes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.started_at.is_none()
            && self.completed_at.is_none()
            && self.order.is_none()
    }
}
