//! Session controller owning the in-memory task list.
//!
//! Every mutation of an existing task is two-phase: the change is applied to
//! the local list first, then committed to the store. A failed commit
//! restores the local list to its state before the call and returns
//! [`TaskBoardError::RemoteWrite`]. Successful commits replace the local
//! entry with the row returned by the store.

use crate::{
    auth::{
        domain::{AuthenticatedUser, UserId},
        ports::{AuthProvider, AuthProviderError},
    },
    task::{
        domain::{
            NewTask, Task, TaskDomainError, TaskEvent, TaskFilter, TaskId, TaskPatch,
            TaskStatistics, TaskTitle, list_order, order_assignments, resequence, visible,
        },
        ports::{TaskStore, TaskStoreError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Validation or status machine rejection.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No user session is resolved.
    #[error("sign in to manage tasks")]
    NotAuthenticated,

    /// The authentication provider could not resolve the session.
    #[error(transparent)]
    Auth(#[from] AuthProviderError),

    /// The task is not part of the loaded list.
    #[error("task {0} is not on this board")]
    UnknownTask(TaskId),

    /// The store rejected a write; local state was rolled back.
    #[error("failed to save changes: {0}")]
    RemoteWrite(#[source] TaskStoreError),

    /// The store could not be read.
    #[error("failed to load tasks: {0}")]
    RemoteRead(#[source] TaskStoreError),
}

impl TaskBoardError {
    /// Returns `true` for input validation failures that should be shown
    /// inline next to the offending field.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Domain(
                TaskDomainError::EmptyTitle
                    | TaskDomainError::TitleTooLong { .. }
                    | TaskDomainError::SequenceLengthMismatch { .. }
                    | TaskDomainError::UnknownTaskInSequence(_)
                    | TaskDomainError::DuplicateTaskInSequence(_)
            )
        )
    }
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task list of one authenticated session.
pub struct TaskBoard<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    owner: UserId,
    tasks: Vec<Task>,
}

impl<S, C> TaskBoard<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Opens the board for the user bound to the current session.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotAuthenticated`] when no user is signed
    /// in, [`TaskBoardError::Auth`] when the provider fails, or
    /// [`TaskBoardError::RemoteRead`] when the initial load fails.
    pub async fn open(
        store: Arc<S>,
        clock: Arc<C>,
        auth: &impl AuthProvider,
    ) -> TaskBoardResult<Self> {
        let user = auth
            .current_user()
            .await?
            .ok_or(TaskBoardError::NotAuthenticated)?;
        Self::for_user(store, clock, &user).await
    }

    /// Opens the board for an already resolved user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::RemoteRead`] when the initial load fails.
    pub async fn for_user(
        store: Arc<S>,
        clock: Arc<C>,
        user: &AuthenticatedUser,
    ) -> TaskBoardResult<Self> {
        let owner = user.id();
        let tasks = store
            .list(owner)
            .await
            .map_err(TaskBoardError::RemoteRead)?;
        Ok(Self {
            store,
            clock,
            owner,
            tasks,
        })
    }

    /// Returns the owner of this board.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the local list in render order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the local copy of one task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks shown under `filter`.
    #[must_use]
    pub fn visible(&self, filter: TaskFilter) -> Vec<&Task> {
        visible(&self.tasks, filter)
    }

    /// Counts the local tasks by status.
    #[must_use]
    pub fn statistics(&self) -> TaskStatistics {
        TaskStatistics::from_tasks(&self.tasks)
    }

    /// Replaces the local list with a fresh read from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::RemoteRead`]; the local list is kept.
    pub async fn refresh(&mut self) -> TaskBoardResult<&[Task]> {
        self.tasks = self
            .store
            .list(self.owner)
            .await
            .map_err(TaskBoardError::RemoteRead)?;
        Ok(&self.tasks)
    }

    /// Creates a pending task and inserts it at its render position.
    ///
    /// The store assigns the identifier, so the local list only changes once
    /// the store has answered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an invalid title or
    /// [`TaskBoardError::RemoteWrite`] when the store rejects the row.
    pub async fn create(&mut self, title: &str) -> TaskBoardResult<Task> {
        let draft = NewTask::new(self.owner, TaskTitle::new(title)?, &*self.clock);
        let created = self.store.create(draft).await.map_err(|err| {
            warn!(owner = %self.owner, error = %err, "task creation failed");
            TaskBoardError::RemoteWrite(err)
        })?;
        debug!(task_id = %created.id(), order = %created.order(), "task created");
        let slot = self
            .tasks
            .partition_point(|task| list_order(task, &created).is_lt());
        self.tasks.insert(slot, created.clone());
        Ok(created)
    }

    /// Advances a task to the next status in its cycle.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::UnknownTask`] or
    /// [`TaskBoardError::RemoteWrite`].
    pub async fn toggle(&mut self, id: TaskId) -> TaskBoardResult<Task> {
        self.apply_event(id, TaskEvent::Toggle).await
    }

    /// Starts a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] (wrapped) when the task
    /// is not pending, otherwise as [`Self::toggle`].
    pub async fn start(&mut self, id: TaskId) -> TaskBoardResult<Task> {
        self.apply_event(id, TaskEvent::Start).await
    }

    /// Completes an in-progress task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] (wrapped) when the task
    /// is not in progress, otherwise as [`Self::toggle`].
    pub async fn complete(&mut self, id: TaskId) -> TaskBoardResult<Task> {
        self.apply_event(id, TaskEvent::Complete).await
    }

    /// Replaces a task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an invalid title,
    /// [`TaskBoardError::UnknownTask`], or [`TaskBoardError::RemoteWrite`].
    pub async fn rename(&mut self, id: TaskId, title: &str) -> TaskBoardResult<Task> {
        let new_title = TaskTitle::new(title)?;
        let mut updated = self.find(id)?.clone();
        updated.rename(new_title.clone());
        self.commit(updated, TaskPatch::new().with_title(new_title))
            .await
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::UnknownTask`] or
    /// [`TaskBoardError::RemoteWrite`]; on failure the task is put back in
    /// its previous position.
    pub async fn delete(&mut self, id: TaskId) -> TaskBoardResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskBoardError::UnknownTask(id))?;
        let removed = self.tasks.remove(index);

        if let Err(err) = self.store.delete(self.owner, id).await {
            warn!(task_id = %id, error = %err, "task deletion failed, restoring task");
            self.tasks.insert(index, removed);
            return Err(TaskBoardError::RemoteWrite(err));
        }
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Reorders the list to match `sequence` and persists the new order
    /// indices in one batch.
    ///
    /// `sequence` must name every task on the board exactly once. Each task
    /// receives its 0-based position in `sequence` as order index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when `sequence` is not a permutation
    /// of the board (nothing changes), or [`TaskBoardError::RemoteWrite`]
    /// when the batch fails (the previous order is restored).
    pub async fn reorder(&mut self, sequence: &[TaskId]) -> TaskBoardResult<&[Task]> {
        let reordered = resequence(&self.tasks, sequence)?;
        let assignments = order_assignments(&reordered);
        let previous = std::mem::replace(&mut self.tasks, reordered);

        if let Err(err) = self.store.apply_order(self.owner, &assignments).await {
            warn!(owner = %self.owner, error = %err, "reorder failed, restoring previous order");
            self.tasks = previous;
            return Err(TaskBoardError::RemoteWrite(err));
        }
        debug!(owner = %self.owner, count = assignments.len(), "task order committed");
        Ok(&self.tasks)
    }

    fn find(&self, id: TaskId) -> TaskBoardResult<&Task> {
        self.task(id).ok_or(TaskBoardError::UnknownTask(id))
    }

    async fn apply_event(&mut self, id: TaskId, event: TaskEvent) -> TaskBoardResult<Task> {
        let mut updated = self.find(id)?.clone();
        updated.transition(event, &*self.clock)?;
        let patch = TaskPatch::lifecycle(&updated);
        self.commit(updated, patch).await
    }

    /// Applies `updated` locally, then writes `patch`; restores the previous
    /// local copy when the write fails.
    async fn commit(&mut self, updated: Task, patch: TaskPatch) -> TaskBoardResult<Task> {
        let id = updated.id();
        let previous = self.replace_local(updated)?;

        match self.store.update(self.owner, id, patch).await {
            Ok(stored) => {
                self.replace_local(stored.clone())?;
                debug!(task_id = %id, status = %stored.status(), "task update committed");
                Ok(stored)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task update failed, restoring task");
                self.replace_local(previous)?;
                Err(TaskBoardError::RemoteWrite(err))
            }
        }
    }

    fn replace_local(&mut self, task: Task) -> TaskBoardResult<Task> {
        let id = task.id();
        let slot = self
            .tasks
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(TaskBoardError::UnknownTask(id))?;
        Ok(std::mem::replace(slot, task))
    }
}
