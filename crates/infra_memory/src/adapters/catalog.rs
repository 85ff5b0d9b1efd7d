//! In-memory report catalog adapter
//!
//! Templates are kept in insertion order; the default-report fallback
//! relies on "first active template for the model" being deterministic.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
    ReportTemplateId,
};
use domain_reporting::{ReportCatalog, ReportTemplate};

/// Vec-backed implementation of the report catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportCatalog {
    templates: Arc<RwLock<Vec<ReportTemplate>>>,
}

impl InMemoryReportCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the catalog with a template, returning its id
    pub async fn seed(&self, template: ReportTemplate) -> ReportTemplateId {
        let id = template.id;
        self.templates.write().await.push(template);
        id
    }
}

impl DomainPort for InMemoryReportCatalog {}

#[async_trait]
impl ReportCatalog for InMemoryReportCatalog {
    #[instrument(skip(self, _metadata))]
    async fn get_template(
        &self,
        id: ReportTemplateId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<ReportTemplate, PortError> {
        self.templates
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("report template", id))
    }

    #[instrument(skip(self, _metadata))]
    async fn find_active_for_model(
        &self,
        model_key: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<ReportTemplate>, PortError> {
        Ok(self
            .templates
            .read()
            .await
            .iter()
            .filter(|t| t.active && t.renders(model_key))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, template, _metadata), fields(template = %template.id))]
    async fn save_template(
        &self,
        template: &ReportTemplate,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!("saving template");
        let mut templates = self.templates.write().await;
        match templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template.clone(),
            None => templates.push(template.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryReportCatalog {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let _ = self.templates.read().await.len();
        HealthCheckResult {
            adapter_id: "memory-report-catalog".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}
