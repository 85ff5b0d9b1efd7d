//! Party domain ports
//!
//! The `PartyPort` trait defines what the party domain needs from its data
//! source. Adapters implement it; services receive it as `Arc<dyn PartyPort>`.

use async_trait::async_trait;

use core_kernel::{DomainPort, OperationMetadata, PartyId, PortError};

use crate::party::Party;

/// Persistence port for parties
#[async_trait]
pub trait PartyPort: DomainPort {
    /// Retrieves a party by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no party has this id.
    async fn get_party(
        &self,
        id: PartyId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Party, PortError>;

    /// Creates or replaces a party record
    async fn save_party(
        &self,
        party: &Party,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}
