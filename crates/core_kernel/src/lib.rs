//! Core Kernel - Foundational types for the product catalog
//!
//! This crate provides the building blocks shared by the catalog domain and
//! its storage adapters:
//! - Strongly-typed identifiers
//! - Port/adapter infrastructure (errors, health checks)
//! - Common error types

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::ProductId;
pub use error::CoreError;
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
