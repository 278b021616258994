//! Tag entity and name-availability check.

use super::{TagColor, TagDomainError};
use crate::ids::{ProjectId, TagId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Label scoped to a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTagData")]
pub struct Tag {
    id: TagId,
    project_id: ProjectId,
    name: String,
    color: Option<TagColor>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTagData {
    /// Persisted tag identifier.
    pub id: TagId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted tag name.
    pub name: String,
    /// Persisted color, if any.
    pub color: Option<TagColor>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Creates a tag.
    ///
    /// An empty `color` means the tag has no color.
    ///
    /// # Errors
    ///
    /// Returns [`TagDomainError::EmptyName`] when `name` is empty, or
    /// [`TagDomainError::InvalidColor`] when a non-empty `color` is not in
    /// `#RRGGBB` form.
    pub fn new(
        id: TagId,
        project_id: ProjectId,
        name: impl Into<String>,
        color: &str,
        clock: &impl Clock,
    ) -> Result<Self, TagDomainError> {
        let tag_name = name.into();
        if tag_name.is_empty() {
            return Err(TagDomainError::EmptyName);
        }
        let tag_color = if color.is_empty() {
            None
        } else {
            Some(TagColor::parse(color)?)
        };

        Ok(Self {
            id,
            project_id,
            name: tag_name,
            color: tag_color,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a tag from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTagData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            color: data.color,
            created_at: data.created_at,
        }
    }

    /// Returns the tag identifier.
    #[must_use]
    pub const fn id(&self) -> &TagId {
        &self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag color, if one was set.
    #[must_use]
    pub const fn color(&self) -> Option<&TagColor> {
        self.color.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl TryFrom<PersistedTagData> for Tag {
    type Error = TagDomainError;

    fn try_from(data: PersistedTagData) -> Result<Self, Self::Error> {
        if data.name.is_empty() {
            return Err(TagDomainError::EmptyName);
        }
        Ok(Self::from_persisted(data))
    }
}

/// Checks that no tag in `existing` already uses `name` within `project_id`.
///
/// Names are compared exactly. Tags belonging to other projects are ignored.
///
/// # Errors
///
/// Returns [`TagDomainError::AlreadyExists`] on the first conflict.
pub fn ensure_tag_name_available<'a>(
    existing: impl IntoIterator<Item = &'a Tag>,
    project_id: &ProjectId,
    name: &str,
) -> Result<(), TagDomainError> {
    let taken = existing
        .into_iter()
        .any(|tag| tag.project_id() == project_id && tag.name() == name);
    if taken {
        return Err(TagDomainError::AlreadyExists {
            project_id: project_id.clone(),
            name: name.to_owned(),
        });
    }
    Ok(())
}
