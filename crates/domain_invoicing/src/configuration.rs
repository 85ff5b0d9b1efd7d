//! Account configuration
//!
//! A single-row configuration record holding the system-wide default report
//! template for invoices. The resolver reads it whenever a party has no
//! qualifying alternative-report association.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, OperationMetadata, PortError, ReportTemplateId};

/// The account configuration singleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfiguration {
    /// System-wide default report template for invoices
    pub default_invoice_report: Option<ReportTemplateId>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl AccountConfiguration {
    /// Creates an unconfigured record
    pub fn unconfigured() -> Self {
        Self {
            default_invoice_report: None,
            updated_at: Utc::now(),
        }
    }

    /// Sets the default invoice report
    pub fn with_default_invoice_report(mut self, report: ReportTemplateId) -> Self {
        self.default_invoice_report = Some(report);
        self.updated_at = Utc::now();
        self
    }
}

impl Default for AccountConfiguration {
    fn default() -> Self {
        Self::unconfigured()
    }
}

/// Persistence port for the configuration singleton
///
/// `load` always succeeds: an adapter that has never stored a record
/// returns the unconfigured value (fixed identity, single row).
#[async_trait]
pub trait ConfigurationPort: DomainPort {
    /// Reads the configuration record
    async fn load(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<AccountConfiguration, PortError>;

    /// Replaces the configuration record
    async fn save(
        &self,
        configuration: &AccountConfiguration,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}
