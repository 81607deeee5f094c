//! Given steps for account BDD scenarios.

use super::world::{AccountWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskdeck::{
    auth::domain::SignUpRequest,
    task::{
        domain::{NewTask, TaskEvent, TaskPatch, TaskTitle},
        ports::TaskStore,
    },
};

#[given(
    r#"a visitor fills the sign-up form with "{email}" and passwords "{password}" and "{confirmation}""#
)]
fn sign_up_form(world: &mut AccountWorld, email: String, password: String, confirmation: String) {
    world.pending_request = Some(SignUpRequest::new(email, password, confirmation));
}

#[given(r#"the visitor enters the full name "{fullname}""#)]
fn full_name(world: &mut AccountWorld, fullname: String) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .take()
        .ok_or_else(|| eyre::eyre!("missing sign-up form in scenario world"))?;
    world.pending_request = Some(request.with_fullname(fullname));
    Ok(())
}

#[given(r#"a registered user "{email}" with password "{password}""#)]
fn registered_user(
    world: &mut AccountWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let request = SignUpRequest::new(email, password.clone(), password);
    run_async(world.accounts.sign_up(&request)).wrap_err("register scenario user")?;
    Ok(())
}

#[given(r#"the user has signed in with "{email}" and "{password}""#)]
fn user_signed_in(
    world: &mut AccountWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let user = run_async(world.accounts.sign_in(&email, &password))
        .wrap_err("sign in scenario user")?;
    world.signed_in = Some(user);
    Ok(())
}

#[given("the user has {total:u64} tasks with {completed:u64} completed")]
fn user_has_tasks(world: &mut AccountWorld, total: u64, completed: u64) -> Result<(), eyre::Report> {
    let owner = world.user()?.id();
    let clock = DefaultClock;
    for index in 0..total {
        let title = TaskTitle::new(format!("Task {index}"))?;
        let mut task = run_async(world.tasks.create(NewTask::new(owner, title, &clock)))
            .wrap_err("create scenario task")?;
        if index < completed {
            task.transition(TaskEvent::Start, &clock)?;
            task.transition(TaskEvent::Complete, &clock)?;
            run_async(
                world
                    .tasks
                    .update(owner, task.id(), TaskPatch::lifecycle(&task)),
            )
            .wrap_err("complete scenario task")?;
        }
    }
    Ok(())
}
