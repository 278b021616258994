//! File attachments on tasks and comments.
//!
//! Attachments are validated once at creation against an
//! [`domain::AttachmentPolicy`] (file name present, size within the limit,
//! MIME type allow-listed) and are immutable afterwards. Only the uploader
//! may delete one.

pub mod domain;

#[cfg(test)]
mod tests;
