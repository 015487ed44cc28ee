//! Test Utilities Crate
//!
//! Provides shared test infrastructure, factories, and fixtures for the
//! product catalog test suite.
//!
//! # Modules
//!
//! - `factory`: Randomised products, in the spirit of a fixture factory
//! - `fixtures`: Pre-built products and transport payloads
//! - `database`: PostgreSQL container management for integration tests
//! - `assertions`: Custom assertion helpers for catalog types
//! - `generators`: Property-based test data generators

pub mod factory;
pub mod fixtures;
pub mod database;
pub mod assertions;
pub mod generators;

pub use factory::*;
pub use fixtures::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
