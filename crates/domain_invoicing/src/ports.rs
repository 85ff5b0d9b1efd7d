//! Invoicing domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, InvoiceId, OperationMetadata, PortError};

use crate::invoice::{CachedDocument, Invoice};

/// Persistence port for invoices
#[async_trait]
pub trait InvoicePort: DomainPort {
    /// Retrieves an invoice by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no invoice has this id.
    async fn get_invoice(
        &self,
        id: InvoiceId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Invoice, PortError>;

    /// Creates or replaces an invoice record
    async fn save_invoice(
        &self,
        invoice: &Invoice,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Persists rendered bytes onto the invoice's cache fields
    ///
    /// This is the system-attributed follow-up write of the render path: it
    /// runs in its own transactional scope and skips the user-level access
    /// re-validation already performed for the read that produced the
    /// bytes. The cache is write-once; an invoice that already carries a
    /// cached document keeps it.
    async fn store_render_cache(
        &self,
        id: InvoiceId,
        document: CachedDocument,
        metadata: OperationMetadata,
    ) -> Result<(), PortError>;
}
