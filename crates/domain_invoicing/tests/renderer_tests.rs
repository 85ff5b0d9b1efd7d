//! Render service tests
//!
//! Covers batch grouping, multi-report merging, the empty-batch legacy
//! contract, the representative access check, and the write-once render
//! cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use core_kernel::OperationMetadata;
use domain_invoicing::{ExecutionOptions, InvoiceRenderService, InvoicingError};
use domain_reporting::{
    OutputFormat, RenderEngineKind, RenderEngineRegistry, ReportAccessControl, ReportTemplate,
    ReportingError,
};
use infra_memory::PermissiveAccessControl;
use test_utils::engines::envelope;
use test_utils::{
    EnvelopeMerger, FailingEngine, TestInvoiceBuilder, TestPartyBuilder, TestSystem,
    TestTemplateBuilder,
};

/// Access stub that counts checks and lets everything through
#[derive(Debug, Default)]
struct CountingAccess {
    checks: AtomicUsize,
}

#[async_trait]
impl ReportAccessControl for CountingAccess {
    async fn check_render(
        &self,
        _template: &ReportTemplate,
        _record_ids: &[Uuid],
        _metadata: Option<&OperationMetadata>,
    ) -> Result<(), ReportingError> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn empty_batch_returns_the_null_tuple() {
    test_utils::init_test_tracing();
    let system = TestSystem::new();
    let execution = system
        .renderer
        .execute_report(&[], &ExecutionOptions::default())
        .await
        .unwrap();
    assert!(execution.is_empty());
    assert_eq!(execution.format, None);
    assert_eq!(execution.report_name, None);
    assert_eq!(execution.pages, None);
    assert_eq!(system.engine.call_count(), 0);
}

#[tokio::test]
async fn single_report_batch_renders_one_unmerged_group() {
    let system = TestSystem::new();
    let template = TestTemplateBuilder::new().build();
    let report = template.id;
    system.catalog.seed(template).await;
    system.set_default_report(report).await;

    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(report).build())
        .await;
    let b = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(report).build())
        .await;

    let execution = system
        .renderer
        .execute_report(&[a, b], &ExecutionOptions::default())
        .await
        .unwrap();

    assert_eq!(system.engine.call_count(), 1);
    let call = &system.engine.calls()[0];
    assert_eq!(call.record_ids, vec![Uuid::from(a), Uuid::from(b)]);
    // one group passes through unmerged
    assert_eq!(
        execution.bytes.as_deref(),
        Some(envelope(report, &call.record_ids).as_slice())
    );
    assert_eq!(execution.report_name.as_deref(), Some("Invoice"));
}

#[tokio::test]
async fn two_report_batch_merges_in_group_order() {
    let system = TestSystem::new();
    let branded = system
        .catalog
        .seed(
            TestTemplateBuilder::new()
                .named("Invoice (branded)")
                .with_output(OutputFormat::Html)
                .direct_print()
                .build(),
        )
        .await;
    let plain = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    system.set_default_report(plain).await;

    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(branded).build())
        .await;
    let b = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(plain).build())
        .await;
    let c = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(branded).build())
        .await;

    let options = ExecutionOptions {
        include_page_count: true,
        ..Default::default()
    };
    let execution = system.renderer.execute_report(&[a, b, c], &options).await.unwrap();

    // groups form in first-encounter order: branded [a, c], then plain [b]
    let calls = system.engine.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].template, branded);
    assert_eq!(calls[0].record_ids, vec![Uuid::from(a), Uuid::from(c)]);
    assert_eq!(calls[1].template, plain);
    assert_eq!(calls[1].record_ids, vec![Uuid::from(b)]);

    // merged output preserves group order and page count
    let mut expected = envelope(branded, &calls[0].record_ids);
    expected.extend_from_slice(&envelope(plain, &calls[1].record_ids));
    assert_eq!(execution.bytes.as_deref(), Some(expected.as_slice()));
    assert_eq!(execution.pages, Some(3));

    // the first group is the representative: name and direct-print
    assert_eq!(execution.report_name.as_deref(), Some("Invoice (branded)"));
    assert!(execution.direct_print);

    // the declared format follows the last rendered group
    assert_eq!(execution.format, Some(OutputFormat::Pdf));
}

#[tokio::test]
async fn one_failing_group_aborts_the_whole_batch() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(report).build())
        .await;

    let mut engines = RenderEngineRegistry::new();
    engines.register(RenderEngineKind::Standard, std::sync::Arc::new(FailingEngine));
    let renderer = InvoiceRenderService::new(
        system.invoices.clone(),
        system.catalog.clone(),
        system.resolver.clone(),
        engines,
        Arc::new(EnvelopeMerger),
        Arc::new(PermissiveAccessControl::new()),
    );

    let err = renderer
        .execute_report(&[a], &ExecutionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InvoicingError::Reporting(ReportingError::RenderFailed { .. })
    ));
}

#[tokio::test]
async fn page_count_is_omitted_unless_requested() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    system.set_default_report(report).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(report).build())
        .await;

    let execution = system
        .renderer
        .execute_report(&[a], &ExecutionOptions::default())
        .await
        .unwrap();
    assert_eq!(execution.pages, None);
    assert!(execution.bytes.is_some());
}

#[tokio::test]
async fn unresolvable_batch_is_an_error() {
    let system = TestSystem::new();
    // no configuration, no catalog entries, no selections
    let invoice = system.invoices.seed(TestInvoiceBuilder::new().build()).await;

    let err = system
        .renderer
        .execute_report(&[invoice], &ExecutionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, InvoicingError::NoResolvableReport));
}

#[tokio::test]
async fn invoices_without_selection_fall_back_to_the_default() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    system.set_default_report(report).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).build())
        .await;

    let execution = system
        .renderer
        .execute_report(&[a], &ExecutionOptions::default())
        .await
        .unwrap();
    assert!(execution.bytes.is_some());
    assert_eq!(system.engine.calls()[0].template, report);
}

#[tokio::test]
async fn caller_fallback_report_is_the_last_resort() {
    let system = TestSystem::new();
    // inactive, so it cannot double as the catalog-derived default
    let template = TestTemplateBuilder::new().inactive().build();
    let fallback = template.id;
    system.catalog.seed(template).await;
    let invoice = system.invoices.seed(TestInvoiceBuilder::new().build()).await;

    let options = ExecutionOptions {
        fallback_report: Some(fallback),
        ..Default::default()
    };
    let execution = system.renderer.execute_report(&[invoice], &options).await.unwrap();
    assert!(execution.bytes.is_some());
    assert_eq!(system.engine.calls()[0].template, fallback);
}

#[tokio::test]
async fn access_is_checked_once_per_batch() {
    let access = Arc::new(CountingAccess::default());
    let system = TestSystem::with_access(access.clone());
    let r1 = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let r2 = system
        .catalog
        .seed(TestTemplateBuilder::new().named("Invoice 2").build())
        .await;
    system.set_default_report(r1).await;

    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(r1).build())
        .await;
    let b = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(r2).build())
        .await;

    system
        .renderer
        .execute_report(&[a, b], &ExecutionOptions::default())
        .await
        .unwrap();

    // one representative check even though two groups rendered
    assert_eq!(access.checks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn access_denial_aborts_the_whole_batch() {
    let system = TestSystem::with_access(Arc::new(test_utils::DenyAllAccess));
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    system.set_default_report(report).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).with_report(report).build())
        .await;

    let err = system
        .renderer
        .execute_report(&[a], &ExecutionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InvoicingError::Reporting(ReportingError::AccessDenied { .. })
    ));
    assert_eq!(system.engine.call_count(), 0);
}

#[tokio::test]
async fn print_invoice_requires_a_selected_report() {
    let system = TestSystem::new();
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).build())
        .await;

    let err = system.renderer.print_invoice(id, None).await.unwrap_err();
    assert!(matches!(
        err,
        InvoicingError::MissingReportConfiguration { invoice } if invoice == id
    ));
}

#[tokio::test]
async fn print_invoice_renders_but_never_caches() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .posted()
                .build(),
        )
        .await;

    system.renderer.print_invoice(id, None).await.unwrap();
    assert_eq!(system.engine.call_count(), 1);

    use domain_invoicing::InvoicePort;
    let invoice = system.invoices.get_invoice(id, None).await.unwrap();
    assert!(invoice.report_cache.is_none());
}

#[tokio::test]
async fn cached_invoice_makes_print_invoice_a_no_op() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .posted()
                .build(),
        )
        .await;

    // first single-invoice execution fills the cache
    system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    assert_eq!(system.engine.call_count(), 1);

    system.renderer.print_invoice(id, None).await.unwrap();
    assert_eq!(system.engine.call_count(), 1);
}
