//! In-memory invoice adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, InvoiceId, OperationMetadata,
    PortError,
};
use domain_invoicing::{CachedDocument, Invoice, InvoicePort};

/// Map-backed implementation of the invoice port
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceAdapter {
    invoices: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
}

impl InMemoryInvoiceAdapter {
    /// Creates an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an invoice, returning its id
    pub async fn seed(&self, invoice: Invoice) -> InvoiceId {
        let id = invoice.id;
        self.invoices.write().await.insert(id, invoice);
        id
    }
}

impl DomainPort for InMemoryInvoiceAdapter {}

#[async_trait]
impl InvoicePort for InMemoryInvoiceAdapter {
    #[instrument(skip(self, _metadata))]
    async fn get_invoice(
        &self,
        id: InvoiceId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Invoice, PortError> {
        self.invoices
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("invoice", id))
    }

    #[instrument(skip(self, invoice, _metadata), fields(invoice = %invoice.id))]
    async fn save_invoice(
        &self,
        invoice: &Invoice,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!("saving invoice");
        self.invoices
            .write()
            .await
            .insert(invoice.id, invoice.clone());
        Ok(())
    }

    #[instrument(skip(self, document, metadata), fields(actor = ?metadata.actor))]
    async fn store_render_cache(
        &self,
        id: InvoiceId,
        document: CachedDocument,
        metadata: OperationMetadata,
    ) -> Result<(), PortError> {
        let mut invoices = self.invoices.write().await;
        let invoice = invoices
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("invoice", id))?;
        // write-once: an invoice that already carries a document keeps it
        let stored = invoice.attach_render_cache(document);
        debug!(stored, "render cache write");
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryInvoiceAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let _ = self.invoices.read().await.len();
        HealthCheckResult {
            adapter_id: "memory-invoice-adapter".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}
