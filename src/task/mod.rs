//! Task lifecycle management.
//!
//! Tasks belong to a project and move through a small status state machine:
//!
//! - `todo` → `in_progress`
//! - `in_progress` → `todo` or `done`
//! - `done` → `in_progress` (reopen)
//!
//! [`domain::Task::complete`] is a separate, more permissive path that
//! finishes a task from any open status. Overdue detection is computed from
//! the injected clock on every call and never stored.

pub mod domain;

#[cfg(test)]
mod tests;
