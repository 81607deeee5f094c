//! Task aggregate root.

use super::{
    OrderIndex, TaskDomainError, TaskEvent, TaskId, TaskPatch, TaskStatus, TaskTitle,
    TaskTransition,
};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: TaskTitle,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    order: OrderIndex,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted start timestamp, if started.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted order index.
    pub order: OrderIndex,
}

/// Creation request handed to the store, which assigns the identifier and
/// order index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    owner_id: UserId,
    title: TaskTitle,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a pending task draft stamped with the current time.
    #[must_use]
    pub fn new(owner_id: UserId, title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            owner_id,
            title,
            created_at: clock.utc(),
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Materializes the stored task once the store has picked its identity
    /// and position.
    #[must_use]
    pub fn into_task(self, id: TaskId, order: OrderIndex) -> Task {
        Task {
            id,
            owner_id: self.owner_id,
            title: self.title,
            status: TaskStatus::Pending,
            created_at: self.created_at,
            started_at: None,
            completed_at: None,
            order,
        }
    }
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            status: data.status,
            created_at: data.created_at,
            started_at: data.started_at,
            completed_at: data.completed_at,
            order: data.order,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when work started, if it has.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when the task was completed, if it currently is.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the order index.
    #[must_use]
    pub const fn order(&self) -> OrderIndex {
        self.order
    }

    /// Returns `true` when the timestamps agree with the status.
    ///
    /// `started_at` is set only outside pending and `completed_at` only while
    /// completed.
    #[must_use]
    pub const fn lifecycle_is_consistent(&self) -> bool {
        let started_ok = match self.status {
            TaskStatus::Pending => self.started_at.is_none(),
            TaskStatus::InProgress | TaskStatus::Completed => true,
        };
        let completed_ok = match self.status {
            TaskStatus::Completed => self.completed_at.is_some(),
            TaskStatus::Pending | TaskStatus::InProgress => self.completed_at.is_none(),
        };
        started_ok && completed_ok
    }

    /// Applies a status machine event.
    ///
    /// Starting stamps `started_at`; completing stamps `completed_at`;
    /// reopening a completed task clears `completed_at` and keeps the
    /// original `started_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the event is not
    /// defined for the current status. The task is left untouched.
    pub fn transition(
        &mut self,
        event: TaskEvent,
        clock: &impl Clock,
    ) -> Result<TaskTransition, TaskDomainError> {
        let transition =
            self.status
                .resolve(event)
                .ok_or(TaskDomainError::InvalidTransition {
                    task_id: self.id,
                    from: self.status,
                    event,
                })?;

        match transition {
            TaskTransition::Start => {
                self.started_at = Some(clock.utc());
            }
            TaskTransition::Complete => {
                self.completed_at = Some(clock.utc());
            }
            TaskTransition::Reopen => {
                self.completed_at = None;
            }
        }
        self.status = transition.target();
        Ok(transition)
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Moves the task to a new order index.
    pub const fn reposition(&mut self, order: OrderIndex) {
        self.order = order;
    }

    /// Writes every field present in `patch` onto this task.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(started_at) = patch.started_at {
            self.started_at = started_at;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}
