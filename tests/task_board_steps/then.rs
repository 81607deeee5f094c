//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, join_titles, run_async};
use rstest_bdd_macros::then;
use taskdeck::task::{
    domain::{TaskDomainError, TaskFilter, TaskStatus},
    services::TaskBoardError,
};

#[then(r#"the task "{title}" is "{status}""#)]
fn task_has_status(
    world: &TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.status() == expected,
        "expected {title:?} to be {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task "{title}" has a completion time"#)]
fn task_has_completion_time(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.completed_at().is_some(),
        "expected {title:?} to have a completion time"
    );
    Ok(())
}

#[then(r#"the task "{title}" has no completion time"#)]
fn task_has_no_completion_time(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(
        task.completed_at().is_none(),
        "expected {title:?} to have no completion time"
    );
    eyre::ensure!(
        task.started_at().is_some(),
        "expected {title:?} to keep its start time"
    );
    Ok(())
}

#[then("the request fails with an invalid transition error")]
fn fails_with_invalid_transition(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the request to fail"))?;
    eyre::ensure!(
        matches!(
            err,
            TaskBoardError::Domain(TaskDomainError::InvalidTransition { .. })
        ),
        "expected InvalidTransition error, got {err:?}"
    );
    Ok(())
}

#[then("the request fails with a validation error")]
fn fails_with_validation_error(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the request to fail"))?;
    eyre::ensure!(err.is_validation(), "expected validation error, got {err:?}");
    Ok(())
}

#[then(r#"the board lists "{titles}""#)]
fn board_lists(world: &TaskBoardWorld, titles: String) -> Result<(), eyre::Report> {
    let listed = join_titles(world.board()?.tasks());
    eyre::ensure!(listed == titles, "expected {titles:?}, board lists {listed:?}");
    Ok(())
}

#[then(r#"reloading the board lists "{titles}""#)]
fn reloaded_board_lists(world: &mut TaskBoardWorld, titles: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    let listed = join_titles(run_async(board.refresh())?);
    eyre::ensure!(listed == titles, "expected {titles:?}, store lists {listed:?}");
    Ok(())
}

#[then(r#"the visible tasks are "{titles}""#)]
fn visible_tasks(world: &TaskBoardWorld, titles: String) -> Result<(), eyre::Report> {
    let shown = join_titles(world.board()?.visible(world.filter));
    eyre::ensure!(shown == titles, "expected {titles:?}, visible {shown:?}");
    Ok(())
}

#[then(r#"the "{filter}" badge shows {count:u64}"#)]
fn badge_count(world: &TaskBoardWorld, filter: String, count: u64) -> Result<(), eyre::Report> {
    let selected = TaskFilter::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    let shown = u64::try_from(world.board()?.statistics().count_for(selected))?;
    eyre::ensure!(shown == count, "expected badge {count}, got {shown}");
    Ok(())
}
