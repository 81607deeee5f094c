//! Database connection settings for the `PostgreSQL` adapters.
//!
//! Settings come from the process environment:
//!
//! - `TASKDECK_DATABASE_URL` (required): libpq connection URL.
//! - `TASKDECK_DB_POOL_SIZE` (optional, default 4): maximum pooled
//!   connections.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "TASKDECK_DATABASE_URL";

/// Environment variable holding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "TASKDECK_DB_POOL_SIZE";

/// `PostgreSQL` connection pool shared by the task and profile adapters.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Errors returned while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to an unusable value.
    #[error("invalid value '{value}' for {var}")]
    Invalid {
        /// Offending variable name.
        var: &'static str,
        /// Rejected raw value.
        value: String,
    },

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the `PostgreSQL` adapters.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    pool_size: u32,
}

impl DatabaseConfig {
    /// Pool size used when none is configured.
    pub const DEFAULT_POOL_SIZE: u32 = 4;

    /// Creates settings for the given URL with the default pool size.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: Self::DEFAULT_POOL_SIZE,
        }
    }

    /// Overrides the maximum pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is missing or the pool size is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is missing or blank, or the pool
    /// size is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let pool_size = match lookup(POOL_SIZE_VAR) {
            None => Self::DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        Ok(Self {
            url: url.trim().to_owned(),
            pool_size,
        })
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Builds a connection pool for these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn build_pool(&self) -> Result<DbPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.as_str());
        let pool = Pool::builder().max_size(self.pool_size).build(manager)?;
        Ok(pool)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redact_url(&self.url))
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::Invalid {
            var: POOL_SIZE_VAR,
            value: raw.to_owned(),
        })
}

/// Masks the password of a connection URL; unparseable values are hidden
/// entirely.
fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "***".to_owned();
    };
    if url.password().is_some() && url.set_password(Some("***")).is_err() {
        return "***".to_owned();
    }
    url.into()
}
