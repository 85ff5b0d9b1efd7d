//! Property-based test generators
//!
//! Proptest strategies producing domain values that respect invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_invoicing::InvoiceLine;

/// Strategy for positive line quantities (up to three decimal places)
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000).prop_map(|n| Decimal::new(n, 3))
}

/// Strategy for unit prices in whole cents
pub fn unit_price_strategy(currency: Currency) -> impl Strategy<Value = Money> {
    (0i64..=10_000_000).prop_map(move |cents| Money::new(Decimal::new(cents, 2), currency))
}

/// Strategy for optional tax rates between 0 and 30%
pub fn tax_rate_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0u32..=3000).prop_map(|n| Decimal::new(n as i64, 4)))
}

/// Strategy for invoice lines in a fixed currency
pub fn invoice_line_strategy(currency: Currency) -> impl Strategy<Value = InvoiceLine> {
    (
        quantity_strategy(),
        unit_price_strategy(currency),
        tax_rate_strategy(),
    )
        .prop_map(|(quantity, unit_price, tax_rate)| {
            let mut line = InvoiceLine::new("generated", quantity, unit_price);
            line.tax_rate = tax_rate;
            line
        })
}

/// Strategy for small invoice line sets
pub fn invoice_lines_strategy(currency: Currency) -> impl Strategy<Value = Vec<InvoiceLine>> {
    proptest::collection::vec(invoice_line_strategy(currency), 1..8)
}
