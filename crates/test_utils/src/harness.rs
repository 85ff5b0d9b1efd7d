//! Assembled test system
//!
//! Wires the in-memory adapters, the recording engine, and the envelope
//! merger into a resolver and render service, the way an application
//! assembly would. Tests seed the stores through the adapter handles and
//! drive the services through `resolver` / `renderer`.

use std::sync::Arc;

use core_kernel::ReportTemplateId;
use domain_invoicing::{AccountConfiguration, InvoiceRenderService, ReportResolver};
use domain_reporting::{RenderEngineKind, RenderEngineRegistry, ReportAccessControl};
use infra_memory::{
    InMemoryConfigurationAdapter, InMemoryInvoiceAdapter, InMemoryPartyAdapter,
    InMemoryReportCatalog, PermissiveAccessControl,
};

use crate::engines::{EnvelopeMerger, RecordingEngine};

/// A fully wired in-memory system
pub struct TestSystem {
    /// Party store handle
    pub parties: Arc<InMemoryPartyAdapter>,
    /// Invoice store handle
    pub invoices: Arc<InMemoryInvoiceAdapter>,
    /// Template catalog handle
    pub catalog: Arc<InMemoryReportCatalog>,
    /// Configuration store handle
    pub configuration: Arc<InMemoryConfigurationAdapter>,
    /// The engine behind both registered engine kinds
    pub engine: Arc<RecordingEngine>,
    /// Resolution service
    pub resolver: Arc<ReportResolver>,
    /// Render orchestration service
    pub renderer: InvoiceRenderService,
}

impl TestSystem {
    /// Assembles a system with permissive access control
    pub fn new() -> Self {
        Self::with_access(Arc::new(PermissiveAccessControl::new()))
    }

    /// Assembles a system with the given access-control adapter
    pub fn with_access(access: Arc<dyn ReportAccessControl>) -> Self {
        let parties = Arc::new(InMemoryPartyAdapter::new());
        let invoices = Arc::new(InMemoryInvoiceAdapter::new());
        let catalog = Arc::new(InMemoryReportCatalog::new());
        let configuration = Arc::new(InMemoryConfigurationAdapter::new());
        let engine = Arc::new(RecordingEngine::new());

        let mut engines = RenderEngineRegistry::new();
        engines.register(RenderEngineKind::Standard, engine.clone());
        engines.register(RenderEngineKind::Html, engine.clone());

        let resolver = Arc::new(ReportResolver::new(
            parties.clone(),
            catalog.clone(),
            configuration.clone(),
        ));
        let renderer = InvoiceRenderService::new(
            invoices.clone(),
            catalog.clone(),
            resolver.clone(),
            engines,
            Arc::new(EnvelopeMerger),
            access,
        );

        Self {
            parties,
            invoices,
            catalog,
            configuration,
            engine,
            resolver,
            renderer,
        }
    }

    /// Stores `report` as the configured system default
    pub async fn set_default_report(&self, report: ReportTemplateId) {
        use domain_invoicing::ConfigurationPort;
        let configuration = AccountConfiguration::unconfigured().with_default_invoice_report(report);
        self.configuration
            .save(&configuration, None)
            .await
            .expect("configuration save cannot fail in memory");
    }
}

impl Default for TestSystem {
    fn default() -> Self {
        Self::new()
    }
}
