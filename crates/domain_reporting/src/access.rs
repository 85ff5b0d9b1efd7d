//! Report access control port
//!
//! Rendering a report over business records is an access-checked read. The
//! check is performed by the host application's authorization layer; this
//! port only carries the question and propagates the denial unchanged.

use async_trait::async_trait;
use uuid::Uuid;

use core_kernel::OperationMetadata;

use crate::error::ReportingError;
use crate::template::ReportTemplate;

/// Port to the host access-control layer
#[async_trait]
pub trait ReportAccessControl: Send + Sync {
    /// Checks whether the operation's actor may render `template` over the
    /// given records
    ///
    /// # Errors
    ///
    /// `ReportingError::AccessDenied` when the actor lacks the permission.
    async fn check_render(
        &self,
        template: &ReportTemplate,
        record_ids: &[Uuid],
        metadata: Option<&OperationMetadata>,
    ) -> Result<(), ReportingError>;
}
