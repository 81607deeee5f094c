//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::when;
use taskdeck::task::domain::TaskFilter;

#[when(r#"the task "{title}" is toggled"#)]
fn toggle_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?.id();
    let result = run_async(world.board_mut()?.toggle(id));
    world.last_error = result.err();
    Ok(())
}

#[when(r#"the task "{title}" is completed directly"#)]
fn complete_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?.id();
    let result = run_async(world.board_mut()?.complete(id));
    world.last_error = result.err();
    Ok(())
}

#[when(r#"the tasks are reordered as "{titles}""#)]
fn reorder_tasks(world: &mut TaskBoardWorld, titles: String) -> Result<(), eyre::Report> {
    let sequence = world.ids_for(&titles)?;
    let result = run_async(world.board_mut()?.reorder(&sequence)).map(|_| ());
    world.last_error = result.err();
    Ok(())
}

#[when(r#"the "{filter}" filter is selected"#)]
fn select_filter(world: &mut TaskBoardWorld, filter: String) -> Result<(), eyre::Report> {
    world.filter = TaskFilter::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    Ok(())
}
