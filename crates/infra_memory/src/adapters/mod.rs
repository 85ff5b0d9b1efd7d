//! In-memory adapter implementations

pub mod access;
pub mod catalog;
pub mod configuration;
pub mod invoice;
pub mod party;

pub use access::PermissiveAccessControl;
pub use catalog::InMemoryReportCatalog;
pub use configuration::InMemoryConfigurationAdapter;
pub use invoice::InMemoryInvoiceAdapter;
pub use party::InMemoryPartyAdapter;
