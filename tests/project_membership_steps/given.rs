//! Given steps for project membership BDD scenarios.

use super::world::ProjectMembershipWorld;
use chrono::TimeDelta;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{
    ids::{ProjectId, UserId},
    project::domain::Project,
};

#[given(r#"a project "{name}" owned by "{owner}""#)]
fn project_owned_by(
    world: &mut ProjectMembershipWorld,
    name: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let project = Project::new(
        ProjectId::new("p1"),
        name,
        "",
        UserId::new(owner),
        &world.clock,
    )
    .wrap_err("create project for membership scenario")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#""{user}" has joined the project"#)]
fn user_has_joined(world: &mut ProjectMembershipWorld, user: String) -> Result<(), eyre::Report> {
    world.clock.advance(TimeDelta::minutes(1));
    let clock = &world.clock;
    let project = world
        .project
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    project
        .add_member(UserId::new(user), clock)
        .wrap_err("add member in scenario setup")?;
    Ok(())
}
