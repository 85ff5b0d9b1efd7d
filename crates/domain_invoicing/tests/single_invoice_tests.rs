//! Single-invoice execution path tests
//!
//! Covers the HTML-capable single-invoice renderer: the cache fast path,
//! the eligibility rules for filling the cache, and print-action
//! resolution.

use domain_invoicing::{ExecutionOptions, InvoicePort, InvoicingError};
use test_utils::{TestInvoiceBuilder, TestPartyBuilder, TestSystem, TestTemplateBuilder};

#[tokio::test]
async fn first_render_fills_the_cache_and_repeats_serve_it() {
    test_utils::init_test_tracing();
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

    let first = system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    assert_eq!(system.engine.call_count(), 1);
    assert!(first.bytes.is_some());

    let invoice = system.invoices.get_invoice(id, None).await.unwrap();
    let cache = invoice.report_cache.expect("cache must be filled");
    assert_eq!(Some(cache.bytes.clone()), first.bytes);

    // the repeat never reaches the engine
    let second = system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    assert_eq!(system.engine.call_count(), 1);
    assert_eq!(second.bytes, first.bytes);
    assert_eq!(second.format, first.format);
    assert_eq!(second.report_name.as_deref(), Some("Invoice"));
}

#[tokio::test]
async fn paid_invoices_cache_too() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .paid()
                .build(),
        )
        .await;

    system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    let invoice = system.invoices.get_invoice(id, None).await.unwrap();
    assert!(invoice.report_cache.is_some());
}

#[tokio::test]
async fn draft_invoices_render_but_never_cache() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .build(),
        )
        .await;

    let execution = system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    assert!(execution.bytes.is_some());

    let invoice = system.invoices.get_invoice(id, None).await.unwrap();
    assert!(invoice.report_cache.is_none());

    // without a cache the second call renders again
    system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    assert_eq!(system.engine.call_count(), 2);
}

#[tokio::test]
async fn supplier_invoices_never_cache() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let id = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .inbound()
                .for_party(party)
                .with_report(report)
                .posted()
                .build(),
        )
        .await;

    system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap();
    let invoice = system.invoices.get_invoice(id, None).await.unwrap();
    assert!(invoice.report_cache.is_none());
}

#[tokio::test]
async fn batch_execution_never_caches() {
    let system = TestSystem::new();
    let report = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;
    let a = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .posted()
                .build(),
        )
        .await;
    let b = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(report)
                .posted()
                .build(),
        )
        .await;

    system
        .renderer
        .execute_report(&[a, b], &domain_invoicing::ExecutionOptions::default())
        .await
        .unwrap();

    for id in [a, b] {
        let invoice = system.invoices.get_invoice(id, None).await.unwrap();
        assert!(invoice.report_cache.is_none());
    }
}

#[tokio::test]
async fn unresolvable_single_invoice_is_a_missing_configuration() {
    let system = TestSystem::new();
    let id = system.invoices.seed(TestInvoiceBuilder::new().build()).await;

    let err = system
        .renderer
        .execute_single_html(id, &ExecutionOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InvoicingError::MissingReportConfiguration { invoice } if invoice == id
    ));
}

#[tokio::test]
async fn print_action_prefers_the_invoice_selection() {
    let system = TestSystem::new();
    let default = system.catalog.seed(TestTemplateBuilder::new().build()).await;
    let branded = system
        .catalog
        .seed(TestTemplateBuilder::new().named("Invoice (branded)").direct_print().build())
        .await;
    system.set_default_report(default).await;
    let party = system.parties.seed(TestPartyBuilder::new().build()).await;

    let selected = system
        .invoices
        .seed(
            TestInvoiceBuilder::new()
                .for_party(party)
                .with_report(branded)
                .build(),
        )
        .await;
    let action = system.renderer.resolve_print_action(selected, None).await.unwrap();
    assert_eq!(action.report, branded);
    assert_eq!(action.name, "Invoice (branded)");
    assert!(action.direct_print);

    let unselected = system
        .invoices
        .seed(TestInvoiceBuilder::new().for_party(party).build())
        .await;
    let action = system
        .renderer
        .resolve_print_action(unselected, None)
        .await
        .unwrap();
    assert_eq!(action.report, default);
    assert!(!action.direct_print);
}

#[tokio::test]
async fn print_action_without_any_report_fails() {
    let system = TestSystem::new();
    let id = system.invoices.seed(TestInvoiceBuilder::new().build()).await;

    let err = system.renderer.resolve_print_action(id, None).await.unwrap_err();
    assert!(matches!(
        err,
        InvoicingError::MissingReportConfiguration { .. }
    ));
}
