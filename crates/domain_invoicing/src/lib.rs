//! Invoicing Domain - invoice lifecycle and report output
//!
//! This crate owns the invoice entity and the two services around its
//! printed output:
//!
//! - [`ReportResolver`] computes the reports available to an invoice and
//!   recomputes the pre-selected one whenever the party changes
//! - [`InvoiceRenderService`] executes print batches: it groups invoices by
//!   resolved report, renders each group, merges multi-report output into
//!   one document, and fills the write-once render cache for eligible
//!   single-invoice prints
//!
//! Both are plain services holding references to ports; neither extends
//! the invoice entity.

pub mod configuration;
pub mod error;
pub mod invoice;
pub mod model;
pub mod ports;
pub mod renderer;
pub mod resolver;

pub use configuration::{AccountConfiguration, ConfigurationPort};
pub use error::InvoicingError;
pub use invoice::{CachedDocument, Invoice, InvoiceDirection, InvoiceLine, InvoiceState};
pub use model::{register_invoice_model, INVOICE_MODEL_KEY};
pub use ports::InvoicePort;
pub use renderer::{ExecutionOptions, InvoiceRenderService, ReportExecution};
pub use resolver::ReportResolver;
