//! Invoice render orchestration
//!
//! The render service takes a print batch, resolves one report per invoice,
//! renders each per-report group through the registered engine, merges
//! multi-report output into a single document, and fills the write-once
//! render cache for eligible single-invoice prints.

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use core_kernel::{InvoiceId, OperationMetadata, ReportTemplateId};
use domain_reporting::{
    DocumentMerger, OutputFormat, PrintAction, RenderEngineRegistry, RenderedDocument,
    ReportAccessControl, ReportCatalog, ReportTemplate,
};

use crate::error::InvoicingError;
use crate::invoice::{CachedDocument, Invoice};
use crate::ports::InvoicePort;
use crate::resolver::ReportResolver;

/// Options for one report execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionOptions {
    /// Populate [`ReportExecution::pages`] in the result
    pub include_page_count: bool,
    /// Report to fall back to when neither the invoice nor the system
    /// default names one (the print action the caller was invoked with)
    pub fallback_report: Option<ReportTemplateId>,
    /// Attribution for access checks and port operations
    pub metadata: Option<OperationMetadata>,
}

/// Result of a report execution
///
/// An empty batch yields the all-None value rather than an error; callers
/// of the legacy print path expect a null tuple there and treat it as a
/// silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExecution {
    /// Declared container format of `bytes`
    pub format: Option<OutputFormat>,
    /// The (possibly merged) document
    pub bytes: Option<Vec<u8>>,
    /// Send straight to the printer
    pub direct_print: bool,
    /// Display name of the representative report
    pub report_name: Option<String>,
    /// Combined page count; only populated on request
    pub pages: Option<u32>,
}

impl ReportExecution {
    /// The null result returned for an empty batch
    pub fn empty() -> Self {
        Self {
            format: None,
            bytes: None,
            direct_print: false,
            report_name: None,
            pages: None,
        }
    }

    /// True when no document was produced
    pub fn is_empty(&self) -> bool {
        self.bytes.is_none()
    }
}

/// One per-report group of a print batch, in first-encounter order
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderGroup {
    report: ReportTemplateId,
    invoice_ids: Vec<InvoiceId>,
}

/// Render orchestration service
///
/// Composes the resolver with the rendering collaborators; like the
/// resolver it holds references and is never part of the invoice entity.
pub struct InvoiceRenderService {
    invoices: Arc<dyn InvoicePort>,
    catalog: Arc<dyn ReportCatalog>,
    resolver: Arc<ReportResolver>,
    engines: RenderEngineRegistry,
    merger: Arc<dyn DocumentMerger>,
    access: Arc<dyn ReportAccessControl>,
}

impl InvoiceRenderService {
    /// Creates the render service
    pub fn new(
        invoices: Arc<dyn InvoicePort>,
        catalog: Arc<dyn ReportCatalog>,
        resolver: Arc<ReportResolver>,
        engines: RenderEngineRegistry,
        merger: Arc<dyn DocumentMerger>,
        access: Arc<dyn ReportAccessControl>,
    ) -> Self {
        Self {
            invoices,
            catalog,
            resolver,
            engines,
            merger,
            access,
        }
    }

    async fn template(
        &self,
        id: ReportTemplateId,
        metadata: Option<OperationMetadata>,
    ) -> Result<ReportTemplate, InvoicingError> {
        Ok(self.catalog.get_template(id, metadata).await?)
    }

    /// Renders one invoice through its selected report and discards the
    /// result
    ///
    /// A no-op when the invoice already carries cached bytes. This path
    /// never fills the cache; that happens only on the single-invoice
    /// execution path.
    ///
    /// # Errors
    ///
    /// `InvoicingError::MissingReportConfiguration` when no report is
    /// selected.
    pub async fn print_invoice(
        &self,
        id: InvoiceId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), InvoicingError> {
        let invoice = self.invoices.get_invoice(id, metadata.clone()).await?;
        if invoice.report_cache.is_some() {
            debug!(invoice = %id, "render cache present, print is a no-op");
            return Ok(());
        }
        let report = invoice
            .selected_report
            .ok_or(InvoicingError::MissingReportConfiguration { invoice: id })?;
        let template = self.template(report, metadata).await?;
        let engine = self.engines.resolve(template.engine)?;
        let _ = engine.render(&template, &[id.into()]).await?;
        Ok(())
    }

    /// Groups the batch by effective report, in first-encounter order
    ///
    /// The effective report of an invoice is its own selection, else the
    /// system default, else the caller-supplied fallback. Invoices with no
    /// effective report drop out of the grouping.
    async fn group_by_report(
        &self,
        invoice_ids: &[InvoiceId],
        options: &ExecutionOptions,
    ) -> Result<Vec<RenderGroup>, InvoicingError> {
        let default = self.resolver.default_report().await?;
        let mut groups: Vec<RenderGroup> = Vec::new();
        for &id in invoice_ids {
            let invoice = self
                .invoices
                .get_invoice(id, options.metadata.clone())
                .await?;
            let Some(report) = invoice
                .selected_report
                .or(default)
                .or(options.fallback_report)
            else {
                continue;
            };
            match groups.iter_mut().find(|g| g.report == report) {
                Some(group) => group.invoice_ids.push(id),
                None => groups.push(RenderGroup {
                    report,
                    invoice_ids: vec![id],
                }),
            }
        }
        Ok(groups)
    }

    /// Executes the report over a print batch
    ///
    /// Each per-report group renders independently; when more than one
    /// group rendered, the outputs are merged page-preservingly in group
    /// order. The declared format is the last rendered group's format, so
    /// a batch must not mix output formats; the display name and
    /// direct-print flag come from the first (representative) group.
    ///
    /// The access check runs once, against the representative report and
    /// the whole batch; per-group checks are not performed. Known
    /// limitation: a batch spanning reports with different permissions is
    /// only checked against the first one.
    ///
    /// # Errors
    ///
    /// `InvoicingError::NoResolvableReport` when no invoice in the batch
    /// has an effective report; engine and access failures abort the whole
    /// call (no partial success).
    pub async fn execute_report(
        &self,
        invoice_ids: &[InvoiceId],
        options: &ExecutionOptions,
    ) -> Result<ReportExecution, InvoicingError> {
        if invoice_ids.is_empty() {
            // legacy contract: a null tuple, not an error
            return Ok(ReportExecution::empty());
        }

        let groups = self.group_by_report(invoice_ids, options).await?;
        if groups.is_empty() {
            return Err(InvoicingError::NoResolvableReport);
        }
        debug!(batch = invoice_ids.len(), groups = groups.len(), "grouped print batch");

        let representative = self
            .template(groups[0].report, options.metadata.clone())
            .await?;
        let batch_uuids: Vec<Uuid> = invoice_ids.iter().map(|&id| id.into()).collect();
        self.access
            .check_render(&representative, &batch_uuids, options.metadata.as_ref())
            .await?;

        let mut parts: Vec<RenderedDocument> = Vec::with_capacity(groups.len());
        for group in &groups {
            let template = if group.report == representative.id {
                representative.clone()
            } else {
                self.template(group.report, options.metadata.clone()).await?
            };
            let engine = self.engines.resolve(template.engine)?;
            let uuids: Vec<Uuid> = group.invoice_ids.iter().map(|&id| id.into()).collect();
            let rendered = engine.render(&template, &uuids).await?;
            debug!(
                report = %template.id,
                invoices = group.invoice_ids.len(),
                pages = rendered.pages,
                "rendered group"
            );
            parts.push(rendered);
        }

        // the last rendered group decides the declared format
        let declared_format = parts.last().map(|part| part.format);
        let (bytes, pages) = if parts.len() > 1 {
            let merged = self.merger.merge(&parts)?;
            info!(groups = parts.len(), pages = merged.pages, "merged multi-report batch");
            (merged.bytes, merged.pages)
        } else {
            let single = parts.swap_remove(0);
            (single.bytes, single.pages)
        };

        Ok(ReportExecution {
            format: declared_format,
            bytes: Some(bytes),
            direct_print: representative.direct_print,
            report_name: Some(representative.name),
            pages: options.include_page_count.then_some(pages),
        })
    }

    /// Executes the HTML-capable single-invoice path
    ///
    /// Serves cached bytes without touching the engine when the invoice
    /// already carries them. Otherwise renders a singleton batch and, for a
    /// posted or paid customer invoice, persists the output onto the
    /// invoice's cache fields through a system-attributed follow-up write.
    /// Draft, cancelled, and supplier invoices never cache.
    ///
    /// # Errors
    ///
    /// `InvoicingError::MissingReportConfiguration` when no report can be
    /// determined from the invoice, the system default, or the caller's
    /// fallback.
    pub async fn execute_single_html(
        &self,
        id: InvoiceId,
        options: &ExecutionOptions,
    ) -> Result<ReportExecution, InvoicingError> {
        let invoice = self.invoices.get_invoice(id, options.metadata.clone()).await?;

        let report = match invoice.selected_report {
            Some(report) => Some(report),
            None => self.resolver.default_report().await?,
        }
        .or(options.fallback_report)
        .ok_or(InvoicingError::MissingReportConfiguration { invoice: id })?;

        if let Some(cache) = &invoice.report_cache {
            let template = self.template(report, options.metadata.clone()).await?;
            debug!(invoice = %id, "serving cached render");
            return Ok(ReportExecution {
                format: Some(cache.format),
                bytes: Some(cache.bytes.clone()),
                direct_print: template.direct_print,
                report_name: Some(template.name),
                pages: None,
            });
        }

        let execution = self.execute_report(&[id], options).await?;

        if invoice.eligible_for_render_cache() {
            if let (Some(format), Some(bytes)) = (execution.format, execution.bytes.as_ref()) {
                let document = CachedDocument {
                    format,
                    bytes: bytes.clone(),
                };
                self.invoices
                    .store_render_cache(id, document, OperationMetadata::system())
                    .await?;
                info!(invoice = %id, "render cache filled");
            }
        }

        Ok(execution)
    }

    /// Resolves the display action the print wizard should run
    ///
    /// The invoice's selected report wins; without one the system default
    /// action is returned.
    ///
    /// # Errors
    ///
    /// `InvoicingError::MissingReportConfiguration` when neither exists.
    pub async fn resolve_print_action(
        &self,
        id: InvoiceId,
        metadata: Option<OperationMetadata>,
    ) -> Result<PrintAction, InvoicingError> {
        let invoice = self.invoices.get_invoice(id, metadata.clone()).await?;
        let report = match invoice.selected_report {
            Some(report) => Some(report),
            None => self.resolver.default_report().await?,
        }
        .ok_or(InvoicingError::MissingReportConfiguration { invoice: id })?;
        let template = self.template(report, metadata).await?;
        Ok(PrintAction::for_template(&template))
    }
}
