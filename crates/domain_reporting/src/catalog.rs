//! Report catalog port
//!
//! The catalog stores report template descriptors. Template lifecycles are
//! owned by the host application; this core reads descriptors and, for the
//! default-report lookup, lists the active templates targeting a model.

use async_trait::async_trait;

use core_kernel::{DomainPort, OperationMetadata, PortError, ReportTemplateId};

use crate::template::ReportTemplate;

/// Persistence port for report templates
#[async_trait]
pub trait ReportCatalog: DomainPort {
    /// Retrieves a template descriptor by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no template has this id.
    async fn get_template(
        &self,
        id: ReportTemplateId,
        metadata: Option<OperationMetadata>,
    ) -> Result<ReportTemplate, PortError>;

    /// Lists active templates targeting `model_key`, in catalog order
    async fn find_active_for_model(
        &self,
        model_key: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<ReportTemplate>, PortError>;

    /// Creates or replaces a template descriptor
    async fn save_template(
        &self,
        template: &ReportTemplate,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}
