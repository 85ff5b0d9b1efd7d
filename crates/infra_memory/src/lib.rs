//! In-memory adapters for the domain ports
//!
//! This crate fills the `infra` role for deployments and tests that run
//! without the host application's persistence layer: every persistence
//! port gets a map-backed implementation behind `tokio::sync::RwLock`,
//! plus a permissive access-control adapter.
//!
//! Adapters implement [`core_kernel::HealthCheckable`] so an assembled
//! system can verify its wiring.

pub mod adapters;

pub use adapters::{
    InMemoryConfigurationAdapter, InMemoryInvoiceAdapter, InMemoryPartyAdapter,
    InMemoryReportCatalog, PermissiveAccessControl,
};
