//! `PostgreSQL` store implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::{
    auth::domain::UserId,
    config::DbPool,
    task::{
        domain::{
            NewTask, OrderAssignment, OrderIndex, PersistedTaskData, Task, TaskId, TaskPatch,
            TaskStatus, TaskTitle,
        },
        ports::{TaskStore, TaskStoreError, TaskStoreResult},
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sql_types::{Array, Int4};
use std::collections::HashSet;
use tracing::debug;

const APPLY_ORDER_SQL: &str = concat!(
    "UPDATE tasks SET position = batch.position ",
    "FROM unnest($1::uuid[], $2::int4[]) AS batch(id, position) ",
    "WHERE tasks.id = batch.id AND tasks.owner_id = $3",
);

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: DbPool,
}

/// Failure inside a store transaction.
#[derive(Debug)]
enum TxError {
    Diesel(DieselError),
    Store(TaskStoreError),
}

impl From<DieselError> for TxError {
    fn from(err: DieselError) -> Self {
        Self::Diesel(err)
    }
}

impl From<TaskStoreError> for TxError {
    fn from(err: TaskStoreError) -> Self {
        Self::Store(err)
    }
}

impl From<TxError> for TaskStoreError {
    fn from(err: TxError) -> Self {
        match err {
            TxError::Diesel(source) => Self::persistence(source),
            TxError::Store(source) => source,
        }
    }
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list(&self, owner: UserId) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order((tasks::position.asc(), tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn create(&self, task: NewTask) -> TaskStoreResult<Task> {
        self.run_blocking(move |connection| {
            let row = connection.transaction::<TaskRow, TxError, _>(|tx| {
                let count = tasks::table
                    .filter(tasks::owner_id.eq(task.owner_id().into_inner()))
                    .count()
                    .get_result::<i64>(tx)?;
                let position = usize::try_from(count)
                    .map_err(TaskStoreError::persistence)
                    .and_then(|existing| {
                        OrderIndex::from_position(existing).map_err(TaskStoreError::persistence)
                    })?;

                let new_row = NewTaskRow {
                    owner_id: task.owner_id().into_inner(),
                    title: task.title().as_str().to_owned(),
                    status: TaskStatus::Pending.as_str().to_owned(),
                    created_at: task.created_at(),
                    position: to_position(position)?,
                };
                let inserted = diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                Ok(inserted)
            })?;
            row_to_task(row)
        })
        .await
    }

    async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskStoreResult<Task> {
        let changes = to_changeset(&patch)?;

        self.run_blocking(move |connection| {
            let owned = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::owner_id.eq(owner.into_inner()));

            let row = if patch.is_empty() {
                owned
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
            } else {
                diesel::update(owned)
                    .set(&changes)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
            }
            .map_err(TaskStoreError::persistence)?;

            row.map_or(Err(TaskStoreError::NotFound(id)), row_to_task)
        })
        .await
    }

    async fn delete(&self, owner: UserId, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner.into_inner())),
            )
            .execute(connection)
            .map_err(TaskStoreError::persistence)?;
            if deleted == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn apply_order(
        &self,
        owner: UserId,
        assignments: &[OrderAssignment],
    ) -> TaskStoreResult<()> {
        if assignments.is_empty() {
            return Ok(());
        }
        let batch = assignments.to_vec();
        let ids: Vec<uuid::Uuid> = batch
            .iter()
            .map(|assignment| assignment.task_id.into_inner())
            .collect();
        let positions = batch
            .iter()
            .map(|assignment| to_position(assignment.order))
            .collect::<TaskStoreResult<Vec<i32>>>()?;

        self.run_blocking(move |connection| {
            connection.transaction::<(), TxError, _>(|tx| {
                let updated = diesel::sql_query(APPLY_ORDER_SQL)
                    .bind::<Array<diesel::sql_types::Uuid>, _>(ids.clone())
                    .bind::<Array<Int4>, _>(positions)
                    .bind::<diesel::sql_types::Uuid, _>(owner.into_inner())
                    .execute(tx)?;
                if updated == batch.len() {
                    return Ok(());
                }

                let owned: HashSet<uuid::Uuid> = tasks::table
                    .filter(tasks::owner_id.eq(owner.into_inner()))
                    .filter(tasks::id.eq_any(ids))
                    .select(tasks::id)
                    .load::<uuid::Uuid>(tx)?
                    .into_iter()
                    .collect();
                let error = batch
                    .iter()
                    .find(|assignment| !owned.contains(&assignment.task_id.into_inner()))
                    .map_or_else(
                        || {
                            TaskStoreError::persistence(std::io::Error::other(
                                "order batch names a task more than once",
                            ))
                        },
                        |missing| TaskStoreError::NotFound(missing.task_id),
                    );
                Err(TxError::Store(error))
            })?;
            debug!(%owner, count = batch.len(), "applied task order batch");
            Ok(())
        })
        .await
    }
}

fn to_position(order: OrderIndex) -> TaskStoreResult<i32> {
    i32::try_from(order.value()).map_err(TaskStoreError::persistence)
}

fn to_changeset(patch: &TaskPatch) -> TaskStoreResult<TaskChangeset> {
    Ok(TaskChangeset {
        title: patch.title.as_ref().map(|title| title.as_str().to_owned()),
        status: patch.status.map(|status| status.as_str().to_owned()),
        started_at: patch.started_at,
        completed_at: patch.completed_at,
        position: patch.order.map(to_position).transpose()?,
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title: persisted_title,
        status: persisted_status,
        created_at,
        started_at,
        completed_at,
        position,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskStoreError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::persistence)?;
    let order = u32::try_from(position)
        .map_err(TaskStoreError::persistence)
        .and_then(|value| OrderIndex::new(value).map_err(TaskStoreError::persistence))?;

    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner_id: UserId::from_uuid(owner_id),
        title,
        status,
        created_at,
        started_at,
        completed_at,
        order,
    });
    if !task.lifecycle_is_consistent() {
        return Err(TaskStoreError::persistence(std::io::Error::other(format!(
            "task row {id} timestamps disagree with its status"
        ))));
    }
    Ok(task)
}
