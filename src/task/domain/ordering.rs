//! Ordering reconciler: turns a reordered sequence into order indices.

use super::{OrderIndex, Task, TaskDomainError, TaskId};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// New order index for one task, as written by a batched reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderAssignment {
    /// Task to move.
    pub task_id: TaskId,
    /// Its new position.
    pub order: OrderIndex,
}

/// Rebuilds `current` in the order given by `sequence`, assigning each task
/// its 0-based position as order index.
///
/// `sequence` must be a permutation of the identifiers in `current`.
///
/// # Errors
///
/// Returns [`TaskDomainError::SequenceLengthMismatch`],
/// [`TaskDomainError::UnknownTaskInSequence`] or
/// [`TaskDomainError::DuplicateTaskInSequence`] when `sequence` is not a
/// permutation, and [`TaskDomainError::OrderOutOfRange`] for lists longer
/// than the persisted range.
pub fn resequence(current: &[Task], sequence: &[TaskId]) -> Result<Vec<Task>, TaskDomainError> {
    if current.len() != sequence.len() {
        return Err(TaskDomainError::SequenceLengthMismatch {
            expected: current.len(),
            actual: sequence.len(),
        });
    }

    let by_id: HashMap<TaskId, &Task> = current.iter().map(|task| (task.id(), task)).collect();
    let mut seen = HashSet::with_capacity(sequence.len());

    sequence
        .iter()
        .enumerate()
        .map(|(position, task_id)| {
            let task = by_id
                .get(task_id)
                .ok_or(TaskDomainError::UnknownTaskInSequence(*task_id))?;
            if !seen.insert(*task_id) {
                return Err(TaskDomainError::DuplicateTaskInSequence(*task_id));
            }
            let mut moved = (*task).clone();
            moved.reposition(OrderIndex::from_position(position)?);
            Ok(moved)
        })
        .collect()
}

/// Lists the `(id, order)` pairs to persist for `tasks`.
#[must_use]
pub fn order_assignments(tasks: &[Task]) -> Vec<OrderAssignment> {
    tasks
        .iter()
        .map(|task| OrderAssignment {
            task_id: task.id(),
            order: task.order(),
        })
        .collect()
}

/// Render order of a task list: ascending order index, then creation time,
/// then identifier.
#[must_use]
pub fn list_order(left: &Task, right: &Task) -> Ordering {
    left.order()
        .cmp(&right.order())
        .then_with(|| left.created_at().cmp(&right.created_at()))
        .then_with(|| left.id().into_inner().cmp(&right.id().into_inner()))
}
