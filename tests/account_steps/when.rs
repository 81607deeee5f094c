//! When steps for account BDD scenarios.

use super::world::{AccountWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the visitor submits the sign-up form")]
fn submit_sign_up(world: &mut AccountWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing sign-up form in scenario world"))?;
    let result = run_async(world.accounts.sign_up(request));
    world.sign_up_result = Some(result);
    Ok(())
}

#[when(r#"the visitor signs in with "{email}" and "{password}""#)]
fn sign_in(world: &mut AccountWorld, email: String, password: String) -> Result<(), eyre::Report> {
    let user =
        run_async(world.accounts.sign_in(&email, &password)).wrap_err("sign in scenario user")?;
    world.signed_in = Some(user);
    Ok(())
}

#[when("the user opens the profile page")]
fn open_profile(world: &mut AccountWorld) -> Result<(), eyre::Report> {
    let user = world.user()?.clone();
    let overview =
        run_async(world.profiles.overview(&user)).wrap_err("load profile overview")?;
    world.overview = Some(overview);
    Ok(())
}
