//! Store port for owner-scoped task persistence.

use crate::auth::domain::UserId;
use crate::task::domain::{NewTask, OrderAssignment, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Every operation is scoped to an owner: rows belonging to other users are
/// invisible and reported as [`TaskStoreError::NotFound`].
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the owner's tasks in ascending order index.
    async fn list(&self, owner: UserId) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new pending task at the end of the owner's list.
    ///
    /// The store assigns the identifier and sets the order index to the
    /// owner's current task count. Two racing creations may receive the same
    /// index.
    async fn create(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Writes the fields present in `patch` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the owner has no such task,
    /// or [`TaskStoreError::Persistence`] when the patched timestamps would
    /// disagree with the status.
    async fn update(&self, owner: UserId, id: TaskId, patch: TaskPatch)
    -> TaskStoreResult<Task>;

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the owner has no such task.
    async fn delete(&self, owner: UserId, id: TaskId) -> TaskStoreResult<()>;

    /// Writes a batch of order indices atomically.
    ///
    /// Either every assignment is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] naming the first assignment whose
    /// task the owner does not have; nothing is written in that case.
    async fn apply_order(
        &self,
        owner: UserId,
        assignments: &[OrderAssignment],
    ) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found for the owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
