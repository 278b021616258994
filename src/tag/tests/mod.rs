//! Unit tests for the tag module.
