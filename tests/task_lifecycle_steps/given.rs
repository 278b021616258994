//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use chrono::TimeDelta;
use mockable::Clock;
use rstest_bdd_macros::given;
use taskboard::task::domain::Task;

#[given(r#"a task in "{status}""#)]
fn task_in_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let request = TaskLifecycleWorld::task_request(parse_status(&status)?);
    world.task = Some(Task::new(request, &world.clock));
    Ok(())
}

#[given(r#"a task in "{status}" due in {hours:i64} hours"#)]
fn task_due_in_hours(
    world: &mut TaskLifecycleWorld,
    status: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    let due = world.clock.utc() + TimeDelta::hours(hours);
    let request = TaskLifecycleWorld::task_request(parse_status(&status)?).with_due_date(due);
    world.task = Some(Task::new(request, &world.clock));
    Ok(())
}
