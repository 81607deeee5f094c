//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task row, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render position of a task among its owner's tasks, ascending.
///
/// Values need not be contiguous and may collide when two creations race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderIndex(u32);

impl OrderIndex {
    /// Largest index representable in the current `PostgreSQL` schema.
    const MAX_PERSISTED_VALUE: u32 = i32::MAX as u32;

    /// The first position.
    pub const FIRST: Self = Self(0);

    /// Creates a validated order index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::OrderOutOfRange`] when the value exceeds
    /// the schema-backed maximum (`i32::MAX`).
    pub const fn new(value: u32) -> Result<Self, TaskDomainError> {
        if value > Self::MAX_PERSISTED_VALUE {
            return Err(TaskDomainError::OrderOutOfRange(value as u64));
        }
        Ok(Self(value))
    }

    /// Creates an order index from a 0-based list position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::OrderOutOfRange`] when the position does not
    /// fit the persisted range.
    pub fn from_position(position: usize) -> Result<Self, TaskDomainError> {
        let value = u32::try_from(position)
            .map_err(|_| TaskDomainError::OrderOutOfRange(position as u64))?;
        Self::new(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
