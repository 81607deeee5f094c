//! Application services for the task list session.

mod board;

pub use board::{TaskBoard, TaskBoardError, TaskBoardResult};
