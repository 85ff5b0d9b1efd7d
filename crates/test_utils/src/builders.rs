//! Test data builders
//!
//! Builder patterns for constructing test entities with sensible defaults,
//! so tests spell out only the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, ModelRegistry, Money, PartyId, ReportTemplateId};
use domain_invoicing::{
    register_invoice_model, Invoice, InvoiceDirection, InvoiceLine, INVOICE_MODEL_KEY,
};
use domain_party::Party;
use domain_reporting::{OutputFormat, RenderEngineKind, ReportTemplate};

/// Builder for report templates
pub struct TestTemplateBuilder {
    name: String,
    engine: RenderEngineKind,
    output: OutputFormat,
    model_key: String,
    active: bool,
    direct_print: bool,
}

impl Default for TestTemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTemplateBuilder {
    /// An active PDF invoice template rendered by the standard engine
    pub fn new() -> Self {
        Self {
            name: "Invoice".to_string(),
            engine: RenderEngineKind::Standard,
            output: OutputFormat::Pdf,
            model_key: INVOICE_MODEL_KEY.to_string(),
            active: true,
            direct_print: false,
        }
    }

    /// Sets the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the engine kind
    pub fn with_engine(mut self, engine: RenderEngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Marks the template inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Marks the template direct-print
    pub fn direct_print(mut self) -> Self {
        self.direct_print = true;
        self
    }

    /// Builds the template
    pub fn build(self) -> ReportTemplate {
        let mut template =
            ReportTemplate::new(self.name, self.engine, self.output, self.model_key);
        template.active = self.active;
        template.direct_print = self.direct_print;
        template
    }
}

/// Builder for parties
pub struct TestPartyBuilder {
    name: String,
    invoice_reports: Vec<ReportTemplateId>,
}

impl Default for TestPartyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPartyBuilder {
    /// A party with no alternative reports
    pub fn new() -> Self {
        Self {
            name: "Test Party".to_string(),
            invoice_reports: Vec::new(),
        }
    }

    /// Sets the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an invoice-model alternative report association
    pub fn with_invoice_report(mut self, report: ReportTemplateId) -> Self {
        self.invoice_reports.push(report);
        self
    }

    /// Builds the party
    pub fn build(self) -> Party {
        let mut registry = ModelRegistry::new();
        register_invoice_model(&mut registry);

        let mut party = Party::new(self.name);
        for report in self.invoice_reports {
            party
                .add_alternative_report(&registry, INVOICE_MODEL_KEY, report)
                .expect("builder associations must be valid");
        }
        party
    }
}

/// Builder for invoices
pub struct TestInvoiceBuilder {
    direction: InvoiceDirection,
    currency: Currency,
    party_id: Option<PartyId>,
    selected_report: Option<ReportTemplateId>,
    lines: Vec<InvoiceLine>,
    posted: bool,
    paid: bool,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// A draft customer invoice with one standard line
    pub fn new() -> Self {
        Self {
            direction: InvoiceDirection::Customer,
            currency: Currency::USD,
            party_id: None,
            selected_report: None,
            lines: vec![InvoiceLine::new(
                "service",
                dec!(1),
                Money::new(dec!(100.00), Currency::USD),
            )],
            posted: false,
            paid: false,
        }
    }

    /// Makes it a supplier invoice
    pub fn inbound(mut self) -> Self {
        self.direction = InvoiceDirection::Supplier;
        self
    }

    /// Sets the billed party
    pub fn for_party(mut self, party_id: PartyId) -> Self {
        self.party_id = Some(party_id);
        self
    }

    /// Sets the selected report
    pub fn with_report(mut self, report: ReportTemplateId) -> Self {
        self.selected_report = Some(report);
        self
    }

    /// Replaces the default line with an explicit one
    pub fn with_line(
        mut self,
        description: &str,
        quantity: Decimal,
        unit_price: Money,
        tax_rate: Option<Decimal>,
    ) -> Self {
        let mut line = InvoiceLine::new(description, quantity, unit_price);
        if let Some(rate) = tax_rate {
            line.tax_rate = Some(rate);
        }
        self.lines = vec![line];
        self
    }

    /// Posts the invoice during build
    pub fn posted(mut self) -> Self {
        self.posted = true;
        self
    }

    /// Posts and pays the invoice during build
    pub fn paid(mut self) -> Self {
        self.posted = true;
        self.paid = true;
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        let mut invoice = Invoice::new(self.direction, self.currency);
        invoice.set_party(self.party_id);
        for line in self.lines {
            invoice.add_line(line);
        }
        invoice
            .select_report(self.selected_report)
            .expect("draft invoices accept report selection");
        if self.posted {
            invoice.post().expect("builder invoice must be postable");
        }
        if self.paid {
            invoice.mark_paid().expect("posted invoice must be payable");
        }
        invoice
    }
}
