//! In-memory account configuration adapter
//!
//! The configuration is a single fixed-identity row; an adapter that was
//! never written to reports the unconfigured value.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};
use domain_invoicing::{AccountConfiguration, ConfigurationPort};

/// Single-slot implementation of the configuration port
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigurationAdapter {
    configuration: Arc<RwLock<Option<AccountConfiguration>>>,
}

impl InMemoryConfigurationAdapter {
    /// Creates an unconfigured adapter
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryConfigurationAdapter {}

#[async_trait]
impl ConfigurationPort for InMemoryConfigurationAdapter {
    #[instrument(skip(self, _metadata))]
    async fn load(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<AccountConfiguration, PortError> {
        Ok(self
            .configuration
            .read()
            .await
            .clone()
            .unwrap_or_default())
    }

    #[instrument(skip(self, configuration, _metadata))]
    async fn save(
        &self,
        configuration: &AccountConfiguration,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!(default = ?configuration.default_invoice_report, "saving configuration");
        *self.configuration.write().await = Some(configuration.clone());
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryConfigurationAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let _ = self.configuration.read().await.is_some();
        HealthCheckResult {
            adapter_id: "memory-configuration-adapter".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}
