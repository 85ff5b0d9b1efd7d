//! Invoicing domain errors

use thiserror::Error;

use core_kernel::{InvoiceId, MoneyError, PortError, ReportTemplateId};
use domain_party::PartyError;
use domain_reporting::ReportingError;

use crate::invoice::InvoiceState;

/// Errors that can occur in the invoicing domain
#[derive(Debug, Error)]
pub enum InvoicingError {
    /// A render was requested but no report template could be determined
    #[error("Missing report configuration for invoice {invoice}")]
    MissingReportConfiguration { invoice: InvoiceId },

    /// Grouping a print batch produced no renderable group
    #[error("No invoice in the batch resolves to a report template")]
    NoResolvableReport,

    /// The chosen report is outside the invoice's available set
    #[error("Report {report} is not available to invoice {invoice}")]
    ReportNotAvailable {
        invoice: InvoiceId,
        report: ReportTemplateId,
    },

    /// Report selection is read-only once the invoice leaves draft
    #[error("Report selection on invoice {invoice} is read-only in state {state}")]
    ReportSelectionLocked {
        invoice: InvoiceId,
        state: InvoiceState,
    },

    /// A lifecycle transition was not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Entity-level validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// A monetary computation failed
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A reporting collaborator failed; access denials pass through here
    /// unchanged
    #[error(transparent)]
    Reporting(#[from] ReportingError),

    /// A party operation failed
    #[error(transparent)]
    Party(#[from] PartyError),

    /// A port operation failed
    #[error(transparent)]
    Port(#[from] PortError),
}
