//! Error types for attachment validation and parsing.

use thiserror::Error;

/// Errors returned while creating attachments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttachmentDomainError {
    /// The file name is empty.
    #[error("file name must not be empty")]
    EmptyFileName,

    /// The file exceeds the size limit.
    #[error("file size {actual_bytes} exceeds maximum of {limit_bytes} bytes")]
    FileTooLarge {
        /// Declared file size.
        actual_bytes: u64,
        /// Limit in force.
        limit_bytes: u64,
    },

    /// The MIME type is not allow-listed.
    #[error("file type '{0}' is not allowed")]
    InvalidType(String),
}

/// Error returned while parsing attachment target types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown attachment target type: {0}")]
pub struct ParseAttachmentTargetError(pub String);
