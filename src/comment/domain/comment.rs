//! Comment entity.

use super::CommentDomainError;
use crate::ids::{CommentId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Authored text attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedCommentData")]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted author.
    pub author_id: UserId,
    /// Persisted body text.
    pub body: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest edit timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyBody`] when `body` is empty.
    pub fn new(
        id: CommentId,
        task_id: TaskId,
        author_id: UserId,
        body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, CommentDomainError> {
        let text = body.into();
        if text.is_empty() {
            return Err(CommentDomainError::EmptyBody);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id,
            task_id,
            author_id,
            body: text,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author_id: data.author_id,
            body: data.body,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> &CommentId {
        &self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` wrote the comment.
    #[must_use]
    pub fn is_author(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    /// Returns whether `user_id` may edit the comment.
    #[must_use]
    pub fn can_edit(&self, user_id: &UserId) -> bool {
        self.is_author(user_id)
    }

    /// Returns whether `user_id` may delete the comment.
    #[must_use]
    pub fn can_delete(&self, user_id: &UserId) -> bool {
        self.is_author(user_id)
    }

    /// Replaces the body on behalf of `user_id`.
    ///
    /// Authorship is checked before the new body.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::NotAuthor`] when `user_id` is not the
    /// author, or [`CommentDomainError::EmptyBody`] when `new_body` is empty.
    pub fn update(
        &mut self,
        user_id: &UserId,
        new_body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), CommentDomainError> {
        if !self.can_edit(user_id) {
            tracing::debug!(comment_id = %self.id, user_id = %user_id, "comment edit denied");
            return Err(CommentDomainError::NotAuthor(user_id.clone()));
        }
        let text = new_body.into();
        if text.is_empty() {
            return Err(CommentDomainError::EmptyBody);
        }

        self.body = text;
        self.updated_at = clock.utc();
        tracing::debug!(comment_id = %self.id, "comment updated");
        Ok(())
    }
}

impl TryFrom<PersistedCommentData> for Comment {
    type Error = CommentDomainError;

    fn try_from(data: PersistedCommentData) -> Result<Self, Self::Error> {
        if data.body.is_empty() {
            return Err(CommentDomainError::EmptyBody);
        }
        Ok(Self::from_persisted(data))
    }
}
