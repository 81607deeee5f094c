//! Given steps for task board BDD scenarios.

use std::sync::Arc;

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::given;
use taskdeck::{
    auth::domain::{AuthenticatedUser, EmailAddress, UserId},
    task::services::TaskBoard,
};

#[given("a signed-in user with an empty board")]
fn signed_in_user(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let user = AuthenticatedUser::new(
        UserId::new(),
        EmailAddress::new("scenario@example.com")?,
        DefaultClock.utc(),
    );
    let board = run_async(TaskBoard::for_user(
        Arc::clone(&world.store),
        Arc::new(DefaultClock),
        &user,
    ))
    .wrap_err("open board for scenario user")?;
    world.board = Some(board);
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    run_async(board.create(&title)).wrap_err("create task in scenario setup")?;
    Ok(())
}

#[given(r#"the task "{title}" has been toggled {times:u64} times"#)]
fn task_toggled(world: &mut TaskBoardWorld, title: String, times: u64) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?.id();
    let board = world.board_mut()?;
    for _ in 0..times {
        run_async(board.toggle(id)).wrap_err("toggle task in scenario setup")?;
    }
    Ok(())
}
