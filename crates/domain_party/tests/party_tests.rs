//! Party domain tests
//!
//! Covers the alternative-report association invariants:
//! - associations may only target catalog-registered models
//! - the projection to report templates collapses duplicates
//! - association ownership (add/remove) stays with the party

use core_kernel::{ModelRegistry, ReportTemplateId};
use domain_party::{Party, PartyError};
use proptest::prelude::*;

fn invoice_registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register("invoice", "Invoice");
    registry
}

#[test]
fn association_requires_registered_model() {
    let registry = invoice_registry();
    let mut party = Party::new("Blue Chair Ltd");

    let err = party
        .add_alternative_report(&registry, "delivery_note", ReportTemplateId::new())
        .unwrap_err();
    assert!(matches!(err, PartyError::UnknownTargetModel { .. }));
    assert!(party.alternative_reports.is_empty());
}

#[test]
fn registering_the_model_twice_keeps_one_catalog_entry() {
    let mut registry = ModelRegistry::new();
    registry.register("invoice", "Invoice");
    registry.register("invoice", "Invoice");

    assert_eq!(registry.entries().len(), 1);
    assert_eq!(registry.label("invoice"), Some("Invoice"));
}

#[test]
fn projection_is_scoped_to_the_requested_model() {
    let mut registry = invoice_registry();
    registry.register("statement", "Statement");

    let mut party = Party::new("Blue Chair Ltd");
    let invoice_report = ReportTemplateId::new();
    let statement_report = ReportTemplateId::new();
    party
        .add_alternative_report(&registry, "invoice", invoice_report)
        .unwrap();
    party
        .add_alternative_report(&registry, "statement", statement_report)
        .unwrap();

    assert_eq!(party.reports_for_model("invoice"), vec![invoice_report]);
    assert_eq!(party.reports_for_model("statement"), vec![statement_report]);
}

#[test]
fn removing_an_association_narrows_the_projection() {
    let registry = invoice_registry();
    let mut party = Party::new("Blue Chair Ltd");
    let r1 = ReportTemplateId::new();
    let r2 = ReportTemplateId::new();
    party
        .add_alternative_report(&registry, "invoice", r1)
        .unwrap();
    let second = party
        .add_alternative_report(&registry, "invoice", r2)
        .unwrap();

    assert_eq!(party.reports_for_model("invoice"), vec![r1, r2]);
    party.remove_alternative_report(second).unwrap();
    assert_eq!(party.reports_for_model("invoice"), vec![r1]);
}

proptest! {
    /// Whatever associations a party accumulates, the projection never
    /// contains the same report twice.
    #[test]
    fn projection_never_contains_duplicates(picks in proptest::collection::vec(0usize..4, 0..12)) {
        let registry = invoice_registry();
        let pool: Vec<ReportTemplateId> = (0..4).map(|_| ReportTemplateId::new()).collect();

        let mut party = Party::new("Blue Chair Ltd");
        for pick in picks {
            // duplicates are rejected; ignore them, the projection must not care
            let _ = party.add_alternative_report(&registry, "invoice", pool[pick]);
        }

        let projected = party.reports_for_model("invoice");
        let unique: std::collections::HashSet<_> = projected.iter().collect();
        prop_assert_eq!(projected.len(), unique.len());
        for report in &projected {
            prop_assert!(pool.contains(report));
        }
    }
}
