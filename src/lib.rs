//! Taskboard: domain rules for a task-tracking application.
//!
//! This crate holds the business-rule layer shared by every surface of the
//! tracker: entity construction with validation, ownership and authorship
//! predicates, project membership, and the task status lifecycle.
//!
//! # Architecture
//!
//! The crate is the domain ring of a hexagonal design. It performs no I/O:
//!
//! - **Domain**: pure entities and value types, one module per context
//! - **Callers**: services, repositories, and transports live outside and
//!   refer to entities by identifier
//!
//! Every operation that stamps or reads time takes a [`mockable::Clock`],
//! so callers pass `DefaultClock` in production and a fixed clock in tests.
//!
//! # Modules
//!
//! - [`ids`]: identifier newtypes
//! - [`user`]: user identities
//! - [`project`]: projects and membership
//! - [`tag`]: tags and task-tag associations
//! - [`task`]: tasks and the status lifecycle
//! - [`comment`]: task comments
//! - [`attachment`]: file attachments and upload policy

pub mod attachment;
pub mod comment;
pub mod ids;
pub mod project;
pub mod tag;
pub mod task;
pub mod user;

#[cfg(test)]
mod test_support;
