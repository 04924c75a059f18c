//! Common test utilities and fixtures for algo-recognizer integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating labelled source trees and running the CLI
//! - Custom assertions for validating CLI output

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;
pub mod test_repo;

pub use assertions::*;
pub use test_repo::TestRepo;
