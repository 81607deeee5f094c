//! Domain model for the to-do task lifecycle.
//!
//! The task domain owns the three-state status machine, the ordering
//! reconciler that turns a reordered sequence into order indices, and the
//! pure derivations (filter view and statistics) rendered by the view layer.
//! Infrastructure concerns stay outside this boundary.

mod error;
mod filter;
mod ids;
mod ordering;
mod patch;
mod stats;
mod status;
mod task;
mod title;

pub use error::{ParseTaskFilterError, ParseTaskStatusError, TaskDomainError};
pub use filter::{TaskFilter, visible};
pub use ids::{OrderIndex, TaskId};
pub use ordering::{OrderAssignment, list_order, order_assignments, resequence};
pub use patch::TaskPatch;
pub use stats::TaskStatistics;
pub use status::{TaskEvent, TaskStatus, TaskTransition};
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
