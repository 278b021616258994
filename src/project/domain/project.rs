//! Project aggregate root.

use super::ProjectDomainError;
use crate::ids::{ProjectId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
///
/// Members are kept in insertion order without duplicates, and the owner is
/// always present. Deserialization goes through [`PersistedProjectData`], so
/// stored data is held to the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedProjectData")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    owner_id: UserId,
    member_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: String,
    /// Persisted free-form description.
    pub description: String,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted member identifiers.
    pub member_ids: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project whose only member is its owner.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when `name` is empty.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        owner_id: UserId,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let project_name = name.into();
        if project_name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id,
            name: project_name,
            description: description.into(),
            member_ids: vec![owner_id.clone()],
            owner_id,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// The owner is re-added to the member list if storage lost it, and
    /// duplicate member rows are collapsed.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let mut member_ids: Vec<UserId> = Vec::with_capacity(data.member_ids.len() + 1);
        if !data.member_ids.contains(&data.owner_id) {
            member_ids.push(data.owner_id.clone());
        }
        for member_id in data.member_ids {
            if !member_ids.contains(&member_id) {
                member_ids.push(member_id);
            }
        }

        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            owner_id: data.owner_id,
            member_ids,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the member identifiers, owner included.
    #[must_use]
    pub fn member_ids(&self) -> &[UserId] {
        &self.member_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` owns the project.
    #[must_use]
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Returns whether `user_id` is a member of the project.
    #[must_use]
    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.member_ids.contains(user_id)
    }

    /// Adds a member to the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AlreadyMember`] when the user already
    /// belongs to the project.
    pub fn add_member(
        &mut self,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if self.is_member(&user_id) {
            return Err(ProjectDomainError::AlreadyMember(user_id));
        }

        tracing::debug!(project_id = %self.id, user_id = %user_id, "member added");
        self.member_ids.push(user_id);
        self.touch(clock);
        Ok(())
    }

    /// Removes a member from the project.
    ///
    /// The owner check runs before the membership check.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::CannotRemoveOwner`] when `user_id` is
    /// the owner, or [`ProjectDomainError::NotMember`] when the user does
    /// not belong to the project.
    pub fn remove_member(
        &mut self,
        user_id: &UserId,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if self.is_owner(user_id) {
            tracing::debug!(project_id = %self.id, user_id = %user_id, "owner removal rejected");
            return Err(ProjectDomainError::CannotRemoveOwner(user_id.clone()));
        }
        if !self.is_member(user_id) {
            return Err(ProjectDomainError::NotMember(user_id.clone()));
        }

        self.member_ids.retain(|member_id| member_id != user_id);
        tracing::debug!(project_id = %self.id, user_id = %user_id, "member removed");
        self.touch(clock);
        Ok(())
    }

    /// Returns whether `user_id` may delete the project.
    #[must_use]
    pub fn can_delete(&self, user_id: &UserId) -> bool {
        self.is_owner(user_id)
    }

    /// Checks that `user_id` may delete the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotOwner`] for anyone but the owner.
    pub fn ensure_can_delete(&self, user_id: &UserId) -> Result<(), ProjectDomainError> {
        if self.can_delete(user_id) {
            return Ok(());
        }
        tracing::debug!(project_id = %self.id, user_id = %user_id, "project deletion denied");
        Err(ProjectDomainError::NotOwner(user_id.clone()))
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl TryFrom<PersistedProjectData> for Project {
    type Error = ProjectDomainError;

    /// Rejects an empty name, then repairs membership as
    /// [`Project::from_persisted`] does.
    fn try_from(data: PersistedProjectData) -> Result<Self, Self::Error> {
        if data.name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }
        Ok(Self::from_persisted(data))
    }
}
