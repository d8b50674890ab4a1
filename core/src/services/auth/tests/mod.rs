//! Unit tests for the authentication core

mod matcher_tests;
pub mod mocks;
