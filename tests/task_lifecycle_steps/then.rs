//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::task::domain::TaskDomainError;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world.task()?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then("the transition fails with an invalid transition error")]
fn transition_fails(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(result, Err(TaskDomainError::InvalidTransition { .. })) {
        return Err(eyre::eyre!("expected InvalidTransition error, got {result:?}"));
    }
    Ok(())
}

#[then("completion fails because the task is already completed")]
fn completion_fails(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(result, Err(TaskDomainError::AlreadyCompleted(_))) {
        return Err(eyre::eyre!("expected AlreadyCompleted error, got {result:?}"));
    }
    Ok(())
}

#[then("the task is overdue")]
fn task_is_overdue(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if !world.task()?.is_overdue(&world.clock) {
        return Err(eyre::eyre!("expected the task to be overdue"));
    }
    Ok(())
}

#[then("the task is not overdue")]
fn task_is_not_overdue(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if world.task()?.is_overdue(&world.clock) {
        return Err(eyre::eyre!("expected the task not to be overdue"));
    }
    Ok(())
}
