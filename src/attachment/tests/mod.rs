//! Unit tests for the attachment module.
