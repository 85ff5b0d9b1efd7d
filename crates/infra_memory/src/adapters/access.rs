//! Permissive access-control adapter
//!
//! Grants every render. Deployments wire the host's authorization layer
//! behind the same port; tests that need denials use a denying stub.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use core_kernel::OperationMetadata;
use domain_reporting::{ReportAccessControl, ReportTemplate, ReportingError};

/// Access control that allows every render
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAccessControl;

impl PermissiveAccessControl {
    /// Creates the adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportAccessControl for PermissiveAccessControl {
    async fn check_render(
        &self,
        template: &ReportTemplate,
        record_ids: &[Uuid],
        metadata: Option<&OperationMetadata>,
    ) -> Result<(), ReportingError> {
        debug!(
            template = %template.id,
            records = record_ids.len(),
            actor = ?metadata.map(|m| &m.actor),
            "render allowed"
        );
        Ok(())
    }
}
