//! Diesel row models for profile persistence.

use super::schema::profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Owning user identifier.
    pub id: uuid::Uuid,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub fullname: String,
    /// Optional avatar location.
    pub avatar_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for mutable profile columns.
///
/// `avatar_url` is written even when `None` so a cleared avatar reaches the
/// row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = profiles)]
#[diesel(treat_none_as_null = true)]
pub struct ProfileChangeset {
    /// Display name.
    pub fullname: String,
    /// Optional avatar location.
    pub avatar_url: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
