//! Invoice report resolution
//!
//! Computes which report templates an invoice may print with and which one
//! is pre-selected. The policy:
//!
//! - a party with exactly one qualifying association unambiguously
//!   overrides the system default;
//! - more than one qualifying association forces an explicit user choice;
//! - none means "use the system default, but never clobber a prior
//!   explicit choice".

use std::sync::Arc;
use tracing::debug;

use core_kernel::{OperationMetadata, ReportTemplateId};
use domain_party::PartyPort;
use domain_reporting::ReportCatalog;

use crate::configuration::ConfigurationPort;
use crate::error::InvoicingError;
use crate::invoice::Invoice;
use crate::model::INVOICE_MODEL_KEY;

/// Report resolution service
///
/// Holds references to its collaborators; it is not part of the invoice
/// entity and is invoked by the application layer on party-change events
/// and before report selection is accepted.
pub struct ReportResolver {
    parties: Arc<dyn PartyPort>,
    catalog: Arc<dyn ReportCatalog>,
    configuration: Arc<dyn ConfigurationPort>,
}

impl ReportResolver {
    /// Creates the resolver
    pub fn new(
        parties: Arc<dyn PartyPort>,
        catalog: Arc<dyn ReportCatalog>,
        configuration: Arc<dyn ConfigurationPort>,
    ) -> Self {
        Self {
            parties,
            catalog,
            configuration,
        }
    }

    /// The system default report for invoices
    ///
    /// The configured default wins; without one, the first active catalog
    /// template targeting the invoice model stands in. May be None when
    /// neither exists.
    pub async fn default_report(&self) -> Result<Option<ReportTemplateId>, InvoicingError> {
        let configuration = self.configuration.load(None).await?;
        if let Some(report) = configuration.default_invoice_report {
            return Ok(Some(report));
        }
        let templates = self
            .catalog
            .find_active_for_model(INVOICE_MODEL_KEY, None)
            .await?;
        Ok(templates.first().map(|t| t.id))
    }

    /// The party's qualifying alternative reports (associations only,
    /// without the system default), duplicates collapsed
    async fn party_reports(
        &self,
        invoice: &Invoice,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<ReportTemplateId>, InvoicingError> {
        let Some(party_id) = invoice.party_id else {
            return Ok(Vec::new());
        };
        let party = self.parties.get_party(party_id, metadata).await?;
        Ok(party.reports_for_model(INVOICE_MODEL_KEY))
    }

    /// The set of reports available to the invoice
    ///
    /// Empty without a party; otherwise the party's qualifying alternative
    /// reports with the system default appended when absent. Set
    /// semantics: duplicates collapse and ordering carries no meaning.
    pub async fn available_reports(
        &self,
        invoice: &Invoice,
    ) -> Result<Vec<ReportTemplateId>, InvoicingError> {
        if invoice.party_id.is_none() {
            return Ok(Vec::new());
        }
        let mut reports = self.party_reports(invoice, None).await?;
        if let Some(default) = self.default_report().await? {
            if !reports.contains(&default) {
                reports.push(default);
            }
        }
        Ok(reports)
    }

    /// Recomputes the invoice's report selection after its party changed
    ///
    /// Pure recomputation triggered by the party-change event only; other
    /// field changes never route through here.
    pub async fn apply_party_change(&self, invoice: &mut Invoice) -> Result<(), InvoicingError> {
        if invoice.party_id.is_none() {
            let default = self.default_report().await?;
            debug!(invoice = %invoice.id, report = ?default, "party cleared, selection reset to default");
            return invoice.select_report(default);
        }

        let alternatives = self.party_reports(invoice, None).await?;
        match alternatives.as_slice() {
            [single] => {
                debug!(invoice = %invoice.id, report = %single, "single alternative selected");
                invoice.select_report(Some(*single))
            }
            [] => {
                if invoice.selected_report.is_none() {
                    let default = self.default_report().await?;
                    debug!(invoice = %invoice.id, report = ?default, "no alternatives, defaulting");
                    invoice.select_report(default)
                } else {
                    // keep the prior explicit choice
                    Ok(())
                }
            }
            _ => {
                // force the user to choose one
                debug!(invoice = %invoice.id, count = alternatives.len(), "ambiguous alternatives, selection cleared");
                invoice.select_report(None)
            }
        }
    }

    /// Accepts a user's report choice for a draft invoice
    ///
    /// # Errors
    ///
    /// `InvoicingError::ReportNotAvailable` when the report is outside the
    /// invoice's available set; the lock error from the entity once the
    /// invoice has left draft.
    pub async fn select_report_checked(
        &self,
        invoice: &mut Invoice,
        report: ReportTemplateId,
    ) -> Result<(), InvoicingError> {
        let available = self.available_reports(invoice).await?;
        if !available.contains(&report) {
            return Err(InvoicingError::ReportNotAvailable {
                invoice: invoice.id,
                report,
            });
        }
        invoice.select_report(Some(report))
    }
}
