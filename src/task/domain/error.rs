//! Error types for task domain validation and parsing.

use super::{TaskEvent, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the accepted length.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The event is not defined for the task's current status.
    #[error("cannot {event} task {task_id} while it is {from}")]
    InvalidTransition {
        /// Task that rejected the event.
        task_id: TaskId,
        /// Status at the time of the attempt.
        from: TaskStatus,
        /// Rejected event.
        event: TaskEvent,
    },

    /// The reordered sequence does not contain every current task.
    #[error("reordered sequence has {actual} tasks, expected {expected}")]
    SequenceLengthMismatch {
        /// Number of tasks in the current list.
        expected: usize,
        /// Number of identifiers in the submitted sequence.
        actual: usize,
    },

    /// The reordered sequence names a task that is not in the list.
    #[error("reordered sequence contains unknown task {0}")]
    UnknownTaskInSequence(TaskId),

    /// The reordered sequence names a task more than once.
    #[error("reordered sequence contains task {0} more than once")]
    DuplicateTaskInSequence(TaskId),

    /// The order index cannot be represented in storage.
    #[error("order index {0} is out of range")]
    OrderOutOfRange(u64),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a filter selector.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}")]
pub struct ParseTaskFilterError(pub String);
