//! Attachment entity.

use super::{AttachmentDomainError, AttachmentPolicy, AttachmentTargetType, IMAGE_MIME_TYPES};
use crate::ids::{AttachmentId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// File metadata attached to a task or comment.
///
/// Deserialized attachments are checked against the default
/// [`AttachmentPolicy`]; use [`Attachment::from_persisted`] for rows written
/// under a different policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedAttachmentData")]
pub struct Attachment {
    id: AttachmentId,
    target_type: AttachmentTargetType,
    target_id: String,
    uploader_id: UserId,
    file_name: String,
    file_size: u64,
    mime_type: String,
    url: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for creating an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAttachment {
    /// Caller-assigned attachment identifier.
    pub id: AttachmentId,
    /// Kind of entity the file is attached to.
    pub target_type: AttachmentTargetType,
    /// Identifier of the task or comment.
    pub target_id: String,
    /// User uploading the file.
    pub uploader_id: UserId,
    /// Original file name.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Declared MIME type.
    pub mime_type: String,
    /// Location of the stored file.
    pub url: String,
}

/// Parameter object for reconstructing a persisted attachment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedAttachmentData {
    /// Persisted attachment fields.
    #[serde(flatten)]
    pub attachment: NewAttachment,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Creates an attachment under the default [`AttachmentPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentDomainError::EmptyFileName`],
    /// [`AttachmentDomainError::FileTooLarge`], or
    /// [`AttachmentDomainError::InvalidType`], checked in that order.
    pub fn new(params: NewAttachment, clock: &impl Clock) -> Result<Self, AttachmentDomainError> {
        Self::new_with_policy(params, &AttachmentPolicy::default(), clock)
    }

    /// Creates an attachment under a caller-supplied policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`AttachmentDomainError`] reported by
    /// [`AttachmentPolicy::check`].
    pub fn new_with_policy(
        params: NewAttachment,
        policy: &AttachmentPolicy,
        clock: &impl Clock,
    ) -> Result<Self, AttachmentDomainError> {
        policy
            .check(&params.file_name, params.file_size, &params.mime_type)
            .inspect_err(|err| {
                tracing::debug!(
                    attachment_id = %params.id,
                    uploader_id = %params.uploader_id,
                    error = %err,
                    "attachment rejected"
                );
            })?;

        Ok(Self::from_parts(params, clock.utc()))
    }

    /// Reconstructs an attachment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAttachmentData) -> Self {
        Self::from_parts(data.attachment, data.created_at)
    }

    fn from_parts(params: NewAttachment, created_at: DateTime<Utc>) -> Self {
        Self {
            id: params.id,
            target_type: params.target_type,
            target_id: params.target_id,
            uploader_id: params.uploader_id,
            file_name: params.file_name,
            file_size: params.file_size,
            mime_type: params.mime_type,
            url: params.url,
            created_at,
        }
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> &AttachmentId {
        &self.id
    }

    /// Returns the kind of entity the file is attached to.
    #[must_use]
    pub const fn target_type(&self) -> AttachmentTargetType {
        self.target_type
    }

    /// Returns the task or comment identifier.
    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Returns the uploader.
    #[must_use]
    pub const fn uploader_id(&self) -> &UserId {
        &self.uploader_id
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the stored file location.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether `user_id` uploaded the file.
    #[must_use]
    pub fn is_uploader(&self, user_id: &UserId) -> bool {
        &self.uploader_id == user_id
    }

    /// Returns whether `user_id` may delete the attachment.
    #[must_use]
    pub fn can_delete(&self, user_id: &UserId) -> bool {
        self.is_uploader(user_id)
    }

    /// Returns the file extension, dot included.
    ///
    /// Only the final `/`-separated segment of the name is considered. A
    /// name without a dot yields an empty string.
    #[must_use]
    pub fn extension(&self) -> &str {
        let base_name = self
            .file_name
            .rsplit('/')
            .next()
            .unwrap_or(self.file_name.as_str());
        base_name
            .rfind('.')
            .and_then(|dot| base_name.get(dot..))
            .unwrap_or_default()
    }

    /// Returns whether the MIME type is an image type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        IMAGE_MIME_TYPES.contains(&self.mime_type.as_str())
    }
}

impl TryFrom<PersistedAttachmentData> for Attachment {
    type Error = AttachmentDomainError;

    fn try_from(data: PersistedAttachmentData) -> Result<Self, Self::Error> {
        let fields = &data.attachment;
        AttachmentPolicy::default().check(
            &fields.file_name,
            fields.file_size,
            &fields.mime_type,
        )?;
        Ok(Self::from_persisted(data))
    }
}
