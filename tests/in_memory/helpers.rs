//! Shared test helpers for in-memory adapter integration tests.

use mockable::{Clock, DefaultClock};
use rstest::fixture;
use taskdeck::{
    auth::domain::{AuthenticatedUser, EmailAddress, UserId},
    task::{
        adapters::memory::InMemoryTaskStore,
        domain::{NewTask, Task, TaskTitle},
        ports::TaskStore,
    },
};

/// Provides a fresh in-memory task store for each test.
#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

/// Builds a resolved user for the given address.
///
/// # Errors
///
/// Returns an error if the address is blank.
pub fn user(email: &str) -> Result<AuthenticatedUser, eyre::Report> {
    Ok(AuthenticatedUser::new(
        UserId::new(),
        EmailAddress::new(email)?,
        DefaultClock.utc(),
    ))
}

/// Creates one task per title for `owner`, in order.
///
/// # Errors
///
/// Returns an error if a title is invalid or the store rejects a row.
pub async fn seed(
    store: &InMemoryTaskStore,
    owner: UserId,
    titles: &[&str],
) -> Result<Vec<Task>, eyre::Report> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        let draft = NewTask::new(owner, TaskTitle::new(title)?, &DefaultClock);
        created.push(store.create(draft).await?);
    }
    Ok(created)
}

/// Returns the titles of `tasks` in order.
#[must_use]
pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}
