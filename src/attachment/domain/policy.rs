//! Upload limits applied when attachments are created.

use super::AttachmentDomainError;

/// Largest accepted upload: 10 MiB.
pub const MAX_ATTACHMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the default policy.
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "text/plain",
];

/// MIME types treated as images.
pub const IMAGE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Upload limits for attachment creation.
///
/// The default policy uses [`MAX_ATTACHMENT_SIZE_BYTES`] and
/// [`ALLOWED_MIME_TYPES`]. MIME types are matched exactly.
///
/// # Examples
///
/// ```
/// use taskboard::attachment::domain::AttachmentPolicy;
///
/// let policy = AttachmentPolicy::default();
/// assert_eq!(policy.max_file_size_bytes, 10_485_760);
/// assert!(policy.allows_mime_type("application/pdf"));
///
/// let images = AttachmentPolicy::images_only();
/// assert!(!images.allows_mime_type("text/plain"));
///
/// let strict = AttachmentPolicy::strict();
/// assert_eq!(strict.max_file_size_bytes, 2 * 1024 * 1024);
/// assert!(strict.allows_mime_type("application/pdf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPolicy {
    /// Maximum file size in bytes, inclusive.
    pub max_file_size_bytes: u64,
    /// Accepted MIME types.
    pub allowed_mime_types: Vec<String>,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: MAX_ATTACHMENT_SIZE_BYTES,
            allowed_mime_types: Vec::from(ALLOWED_MIME_TYPES.map(str::to_owned)),
        }
    }
}

impl AttachmentPolicy {
    /// Creates a policy accepting only image types.
    #[must_use]
    pub fn images_only() -> Self {
        Self::default().with_allowed_mime_types(IMAGE_MIME_TYPES.map(str::to_owned))
    }

    /// Creates a strict policy with reduced limits.
    ///
    /// Accepts images and PDF documents up to 2 MiB.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
            .with_max_file_size_bytes(2 * 1024 * 1024) // 2 MiB
            .with_allowed_mime_types(
                IMAGE_MIME_TYPES
                    .into_iter()
                    .chain(["application/pdf"])
                    .map(str::to_owned),
            )
    }

    /// Sets the maximum file size.
    #[must_use]
    pub const fn with_max_file_size_bytes(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }

    /// Replaces the accepted MIME types.
    #[must_use]
    pub fn with_allowed_mime_types(mut self, types: impl IntoIterator<Item = String>) -> Self {
        self.allowed_mime_types = types.into_iter().collect();
        self
    }

    /// Returns whether `mime_type` is accepted.
    #[must_use]
    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed == mime_type)
    }

    /// Runs the creation checks in order: file name, size, MIME type.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`AttachmentDomainError`].
    pub fn check(
        &self,
        file_name: &str,
        file_size: u64,
        mime_type: &str,
    ) -> Result<(), AttachmentDomainError> {
        if file_name.is_empty() {
            return Err(AttachmentDomainError::EmptyFileName);
        }
        if file_size > self.max_file_size_bytes {
            return Err(AttachmentDomainError::FileTooLarge {
                actual_bytes: file_size,
                limit_bytes: self.max_file_size_bytes,
            });
        }
        if !self.allows_mime_type(mime_type) {
            return Err(AttachmentDomainError::InvalidType(mime_type.to_owned()));
        }
        Ok(())
    }
}
