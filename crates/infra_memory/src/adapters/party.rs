//! In-memory party adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PartyId,
    PortError,
};
use domain_party::{Party, PartyPort};

/// Map-backed implementation of the party port
#[derive(Debug, Clone, Default)]
pub struct InMemoryPartyAdapter {
    parties: Arc<RwLock<HashMap<PartyId, Party>>>,
}

impl InMemoryPartyAdapter {
    /// Creates an empty adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a party, returning its id
    pub async fn seed(&self, party: Party) -> PartyId {
        let id = party.id;
        self.parties.write().await.insert(id, party);
        id
    }
}

impl DomainPort for InMemoryPartyAdapter {}

#[async_trait]
impl PartyPort for InMemoryPartyAdapter {
    #[instrument(skip(self, _metadata))]
    async fn get_party(
        &self,
        id: PartyId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Party, PortError> {
        self.parties
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("party", id))
    }

    #[instrument(skip(self, party, _metadata), fields(party = %party.id))]
    async fn save_party(
        &self,
        party: &Party,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!("saving party");
        self.parties.write().await.insert(party.id, party.clone());
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryPartyAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let _ = self.parties.read().await.len();
        HealthCheckResult {
            adapter_id: "memory-party-adapter".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}
