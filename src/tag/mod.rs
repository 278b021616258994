//! Project-scoped tags and their task associations.
//!
//! Tags carry an optional `#RRGGBB` color. Name uniqueness within a project
//! is not enforced by [`domain::Tag::new`]; callers that need it look up
//! the project's existing tags and use
//! [`domain::ensure_tag_name_available`] before creating a new one.

pub mod domain;

#[cfg(test)]
mod tests;
