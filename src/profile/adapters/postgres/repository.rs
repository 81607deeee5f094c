//! `PostgreSQL` repository implementation for profile storage.

use super::{
    models::{ProfileChangeset, ProfileRow},
    schema::profiles,
};
use crate::{
    auth::domain::{EmailAddress, UserId},
    config::DbPool,
    profile::{
        domain::{FullName, PersistedProfileData, UserProfile},
        ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed profile repository.
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: DbPool,
}

impl PostgresProfileRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProfileRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProfileRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProfileRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProfileRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find(&self, id: UserId) -> ProfileRepositoryResult<Option<UserProfile>> {
        self.run_blocking(move |connection| {
            let row = find_row(connection, id)?;
            row.map(row_to_profile).transpose()
        })
        .await
    }

    async fn ensure(&self, profile: &UserProfile) -> ProfileRepositoryResult<UserProfile> {
        let id = profile.id();
        let new_row = to_row(profile);

        self.run_blocking(move |connection| {
            diesel::insert_into(profiles::table)
                .values(&new_row)
                .on_conflict(profiles::id)
                .do_nothing()
                .execute(connection)
                .map_err(ProfileRepositoryError::persistence)?;

            let stored = find_row(connection, id)?.ok_or(ProfileRepositoryError::NotFound(id))?;
            row_to_profile(stored)
        })
        .await
    }

    async fn update(&self, profile: &UserProfile) -> ProfileRepositoryResult<()> {
        let id = profile.id();
        let changes = ProfileChangeset {
            fullname: profile.fullname().to_owned(),
            avatar_url: profile.avatar_url().map(str::to_owned),
            updated_at: profile.updated_at(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(profiles::table.filter(profiles::id.eq(id.into_inner())))
                .set(&changes)
                .execute(connection)
                .map_err(ProfileRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProfileRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn find_row(
    connection: &mut PgConnection,
    id: UserId,
) -> ProfileRepositoryResult<Option<ProfileRow>> {
    profiles::table
        .filter(profiles::id.eq(id.into_inner()))
        .select(ProfileRow::as_select())
        .first::<ProfileRow>(connection)
        .optional()
        .map_err(ProfileRepositoryError::persistence)
}

fn to_row(profile: &UserProfile) -> ProfileRow {
    ProfileRow {
        id: profile.id().into_inner(),
        email: profile.email().as_str().to_owned(),
        fullname: profile.fullname().to_owned(),
        avatar_url: profile.avatar_url().map(str::to_owned),
        created_at: profile.created_at(),
        updated_at: profile.updated_at(),
    }
}

fn row_to_profile(row: ProfileRow) -> ProfileRepositoryResult<UserProfile> {
    let ProfileRow {
        id,
        email: persisted_email,
        fullname: persisted_fullname,
        avatar_url,
        created_at,
        updated_at,
    } = row;

    let email = EmailAddress::new(persisted_email).map_err(ProfileRepositoryError::persistence)?;
    let fullname =
        FullName::new(&persisted_fullname).map_err(ProfileRepositoryError::persistence)?;

    Ok(UserProfile::from_persisted(PersistedProfileData {
        id: UserId::from_uuid(id),
        email,
        fullname,
        avatar_url,
        created_at,
        updated_at,
    }))
}
