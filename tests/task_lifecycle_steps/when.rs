//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use chrono::TimeDelta;
use rstest_bdd_macros::when;

#[when(r#"the task is transitioned to "{target}""#)]
fn task_is_transitioned(
    world: &mut TaskLifecycleWorld,
    target: String,
) -> Result<(), eyre::Report> {
    let next = parse_status(&target)?;
    world.clock.advance(TimeDelta::minutes(1));
    let clock = &world.clock;
    let task = world
        .task
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world.last_result = Some(task.transition_to(next, clock));
    Ok(())
}

#[when("the task is completed")]
fn task_is_completed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    world.clock.advance(TimeDelta::minutes(1));
    let clock = &world.clock;
    let task = world
        .task
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world.last_result = Some(task.complete(clock));
    Ok(())
}

#[when("{hours:i64} hours pass")]
fn hours_pass(world: &mut TaskLifecycleWorld, hours: i64) {
    world.clock.advance(TimeDelta::hours(hours));
}
