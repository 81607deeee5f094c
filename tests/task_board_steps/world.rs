//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskFilter, TaskId},
    services::{TaskBoard, TaskBoardError},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub board: Option<TestBoard>,
    pub filter: TaskFilter,
    pub last_error: Option<TaskBoardError>,
}

impl TaskBoardWorld {
    /// Creates a world with an empty store and no board opened yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryTaskStore::new()),
            board: None,
            filter: TaskFilter::All,
            last_error: None,
        }
    }

    /// Returns the open board.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been opened in the scenario.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the open board mutably.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been opened in the scenario.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Finds a task on the board by title.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has the given title.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.board()?
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }

    /// Resolves a comma-separated list of titles to task identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error when a title is not on the board.
    pub fn ids_for(&self, titles: &str) -> Result<Vec<TaskId>, eyre::Report> {
        split_titles(titles)
            .iter()
            .map(|title| self.task_titled(title).map(|task| task.id()))
            .collect()
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Splits a comma-separated title list.
#[must_use]
pub fn split_titles(titles: &str) -> Vec<String> {
    titles
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Renders board titles as a comma-separated list.
#[must_use]
pub fn join_titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    tasks
        .into_iter()
        .map(|task| task.title().as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
