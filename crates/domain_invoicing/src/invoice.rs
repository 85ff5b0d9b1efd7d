//! Invoice entity and lifecycle
//!
//! The invoice carries the two fields this module exists for: the report
//! template selected for printing, and the write-once cache of the rendered
//! document. Report selection is recomputed on party change by the resolver
//! and stays editable until the invoice is posted; the cache is filled once
//! by the render service and never mutated afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, InvoiceId, InvoiceLineId, Money, PartyId, ReportTemplateId};
use domain_reporting::OutputFormat;

use crate::error::InvoicingError;

/// Invoice lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    /// Being drafted; every field is editable
    Draft,
    /// Posted to the ledger
    Posted,
    /// Fully paid
    Paid,
    /// Cancelled/voided
    Cancelled,
}

impl InvoiceState {
    /// Report selection is frozen outside draft
    pub fn report_selection_locked(&self) -> bool {
        !matches!(self, InvoiceState::Draft)
    }
}

impl fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceState::Draft => "draft",
            InvoiceState::Posted => "posted",
            InvoiceState::Paid => "paid",
            InvoiceState::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

/// Whether the invoice bills a customer or records a supplier bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceDirection {
    /// Outbound, customer-facing
    Customer,
    /// Inbound, received from a supplier
    Supplier,
}

impl InvoiceDirection {
    /// True for customer-facing invoices
    pub fn is_outbound(&self) -> bool {
        matches!(self, InvoiceDirection::Customer)
    }
}

/// A line item on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Line identifier
    pub id: InvoiceLineId,
    /// Description shown on the document
    pub description: String,
    /// Quantity
    pub quantity: Decimal,
    /// Unit price
    pub unit_price: Money,
    /// Tax rate applied to the line amount (e.g. 0.10 for 10%)
    pub tax_rate: Option<Decimal>,
}

impl InvoiceLine {
    /// Creates a line without tax
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Money) -> Self {
        Self {
            id: InvoiceLineId::new(),
            description: description.into(),
            quantity,
            unit_price,
            tax_rate: None,
        }
    }

    /// Sets the tax rate
    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    /// Net amount: quantity × unit price, rounded to the currency
    pub fn line_amount(&self) -> Money {
        self.unit_price.multiply(self.quantity).round_to_currency()
    }

    /// Tax amount for this line, zero when untaxed
    pub fn tax_amount(&self) -> Money {
        match self.tax_rate {
            Some(rate) => self.line_amount().multiply(rate).round_to_currency(),
            None => Money::zero(self.unit_price.currency()),
        }
    }
}

/// Rendered document bytes cached on the invoice record
///
/// Populated at most once, on first successful render of a posted or paid
/// customer invoice; repeat prints serve these bytes without touching the
/// rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedDocument {
    /// Container format of `bytes`
    pub format: OutputFormat,
    /// The rendered payload
    pub bytes: Vec<u8>,
}

/// An invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Human-readable number
    pub number: String,
    /// Customer or supplier document
    pub direction: InvoiceDirection,
    /// The billed party; required before posting
    pub party_id: Option<PartyId>,
    /// Lifecycle state
    pub state: InvoiceState,
    /// Document currency
    pub currency: Currency,
    /// Invoice date
    pub invoice_date: NaiveDate,
    /// Line items
    pub lines: Vec<InvoiceLine>,
    /// Report template chosen for printing this invoice
    pub selected_report: Option<ReportTemplateId>,
    /// Write-once cache of the rendered document
    pub report_cache: Option<CachedDocument>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a draft invoice
    pub fn new(direction: InvoiceDirection, currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new_v7(),
            number: generate_invoice_number(),
            direction,
            party_id: None,
            state: InvoiceState::Draft,
            currency,
            invoice_date: now.date_naive(),
            lines: Vec::new(),
            selected_report: None,
            report_cache: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Points the invoice at a (possibly absent) party
    ///
    /// Only the reference changes here; the report-selection consequences
    /// are applied by the resolver, which callers invoke right after.
    pub fn set_party(&mut self, party_id: Option<PartyId>) {
        self.party_id = party_id;
        self.updated_at = Utc::now();
    }

    /// Appends a line item
    pub fn add_line(&mut self, line: InvoiceLine) {
        self.lines.push(line);
        self.updated_at = Utc::now();
    }

    /// Sum of line net amounts
    pub fn untaxed_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc + line.line_amount()
            })
    }

    /// Sum of line tax amounts
    pub fn tax_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| acc + line.tax_amount())
    }

    /// Untaxed plus tax
    pub fn total_amount(&self) -> Money {
        self.untaxed_amount() + self.tax_amount()
    }

    /// Sets or clears the report selection
    ///
    /// # Errors
    ///
    /// `InvoicingError::ReportSelectionLocked` once the invoice has left
    /// draft; the field is read-only for posted, paid, and cancelled
    /// invoices.
    pub fn select_report(
        &mut self,
        report: Option<ReportTemplateId>,
    ) -> Result<(), InvoicingError> {
        if self.state.report_selection_locked() {
            return Err(InvoicingError::ReportSelectionLocked {
                invoice: self.id,
                state: self.state,
            });
        }
        self.selected_report = report;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Posts the invoice
    ///
    /// # Errors
    ///
    /// Fails unless the invoice is a draft with a party, at least one line,
    /// and a selected report.
    pub fn post(&mut self) -> Result<(), InvoicingError> {
        if self.state != InvoiceState::Draft {
            return Err(InvoicingError::InvalidStateTransition(format!(
                "cannot post a {} invoice",
                self.state
            )));
        }
        if self.party_id.is_none() {
            return Err(InvoicingError::Validation(
                "cannot post an invoice without a party".into(),
            ));
        }
        if self.lines.is_empty() {
            return Err(InvoicingError::Validation(
                "cannot post an invoice without lines".into(),
            ));
        }
        if self.selected_report.is_none() {
            return Err(InvoicingError::Validation(
                "cannot post an invoice without a report template".into(),
            ));
        }
        self.state = InvoiceState::Posted;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Marks a posted invoice paid
    pub fn mark_paid(&mut self) -> Result<(), InvoicingError> {
        if self.state != InvoiceState::Posted {
            return Err(InvoicingError::InvalidStateTransition(format!(
                "cannot pay a {} invoice",
                self.state
            )));
        }
        self.state = InvoiceState::Paid;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Cancels a draft or posted invoice
    pub fn cancel(&mut self) -> Result<(), InvoicingError> {
        match self.state {
            InvoiceState::Draft | InvoiceState::Posted => {
                self.state = InvoiceState::Cancelled;
                self.updated_at = Utc::now();
                Ok(())
            }
            state => Err(InvoicingError::InvalidStateTransition(format!(
                "cannot cancel a {state} invoice"
            ))),
        }
    }

    /// True when the rendered document may be cached on this record:
    /// posted or paid, and customer-facing
    pub fn eligible_for_render_cache(&self) -> bool {
        matches!(self.state, InvoiceState::Posted | InvoiceState::Paid)
            && self.direction.is_outbound()
    }

    /// Stores the rendered document unless one is already cached
    ///
    /// Returns true when the document was stored. The cache is write-once:
    /// a second call keeps the first document and returns false.
    pub fn attach_render_cache(&mut self, document: CachedDocument) -> bool {
        if self.report_cache.is_some() {
            return false;
        }
        self.report_cache = Some(document);
        self.updated_at = Utc::now();
        true
    }
}

/// Generates a human-readable invoice number
fn generate_invoice_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("INV-{}", duration.as_millis() % 10_000_000_000)
}
