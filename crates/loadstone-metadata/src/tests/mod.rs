//! Unit tests for the loadstone-metadata crate.

mod list_tests;
