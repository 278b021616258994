//! Domain model for file attachments.

mod attachment;
mod error;
mod policy;
mod target;

pub use attachment::{Attachment, NewAttachment, PersistedAttachmentData};
pub use error::{AttachmentDomainError, ParseAttachmentTargetError};
pub use policy::{ALLOWED_MIME_TYPES, AttachmentPolicy, IMAGE_MIME_TYPES, MAX_ATTACHMENT_SIZE_BYTES};
pub use target::AttachmentTargetType;
