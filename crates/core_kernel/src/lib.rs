//! Core Kernel - Foundational types for the invoicing system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port infrastructure (errors, metadata, health checks)
//! - The target-model registry for alternative report associations

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod registry;

pub use error::CoreError;
pub use identifiers::{AssociationId, InvoiceId, InvoiceLineId, PartyId, ReportTemplateId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{
    Actor, AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata,
    PortError,
};
pub use registry::{ModelEntry, ModelRegistry};
