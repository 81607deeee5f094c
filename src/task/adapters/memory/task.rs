//! In-memory store for task tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    auth::domain::UserId,
    task::{
        domain::{NewTask, OrderAssignment, OrderIndex, Task, TaskId, TaskPatch, list_order},
        ports::{TaskStore, TaskStoreError, TaskStoreResult},
    },
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

fn inconsistent_lifecycle(id: TaskId) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(format!(
        "task {id} timestamps disagree with its status"
    )))
}

impl InMemoryTaskState {
    fn owned_mut(&mut self, owner: UserId, id: TaskId) -> TaskStoreResult<&mut Task> {
        self.tasks
            .get_mut(&id)
            .filter(|task| task.owner_id() == owner)
            .ok_or(TaskStoreError::NotFound(id))
    }

    fn owns(&self, owner: UserId, id: TaskId) -> bool {
        self.tasks
            .get(&id)
            .is_some_and(|task| task.owner_id() == owner)
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner_id() == owner)
            .cloned()
            .collect();
        tasks.sort_by(list_order);
        Ok(tasks)
    }

    async fn create(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let owner = task.owner_id();
        let count = state
            .tasks
            .values()
            .filter(|existing| existing.owner_id() == owner)
            .count();
        let order = OrderIndex::from_position(count).map_err(TaskStoreError::persistence)?;

        let stored = task.into_task(TaskId::new(), order);
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state.owned_mut(owner, id)?;
        let mut patched = task.clone();
        patched.apply_patch(&patch);
        if !patched.lifecycle_is_consistent() {
            return Err(inconsistent_lifecycle(id));
        }
        *task = patched.clone();
        Ok(patched)
    }

    async fn delete(&self, owner: UserId, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.owns(owner, id) {
            return Err(TaskStoreError::NotFound(id));
        }
        state.tasks.remove(&id);
        Ok(())
    }

    async fn apply_order(
        &self,
        owner: UserId,
        assignments: &[OrderAssignment],
    ) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        // Nothing is written unless every id belongs to the owner.
        if let Some(missing) = assignments
            .iter()
            .find(|assignment| !state.owns(owner, assignment.task_id))
        {
            return Err(TaskStoreError::NotFound(missing.task_id));
        }

        for assignment in assignments {
            let task = state.owned_mut(owner, assignment.task_id)?;
            task.reposition(assignment.order);
        }
        Ok(())
    }
}
