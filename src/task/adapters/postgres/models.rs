//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Start timestamp.
    pub started_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Order index.
    pub position: i32,
}

/// Insert model for task records; the id column uses its database default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Order index.
    pub position: i32,
}

/// Partial update for task records.
///
/// Outer `None` skips a column; `Some(None)` writes `NULL`.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Title.
    pub title: Option<String>,
    /// Lifecycle status.
    pub status: Option<String>,
    /// Start timestamp.
    pub started_at: Option<Option<DateTime<Utc>>>,
    /// Completion timestamp.
    pub completed_at: Option<Option<DateTime<Utc>>>,
    /// Order index.
    pub position: Option<i32>,
}
