//! Shared test utilities for the invoicing system
//!
//! - [`builders`] - fluent builders for parties, invoices, and templates
//! - [`fixtures`] - pre-built amounts and rates
//! - [`engines`] - recording/failing engine stubs, envelope merger, and a
//!   denying access adapter
//! - [`harness`] - a fully wired in-memory system
//! - [`generators`] - proptest strategies

pub mod builders;
pub mod engines;
pub mod fixtures;
pub mod generators;
pub mod harness;

pub use builders::{TestInvoiceBuilder, TestPartyBuilder, TestTemplateBuilder};
pub use engines::{DenyAllAccess, EnvelopeMerger, FailingEngine, RecordingEngine, RenderCall};
pub use fixtures::{MoneyFixtures, TaxFixtures};
pub use harness::TestSystem;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

/// Initializes tracing for a test binary; safe to call repeatedly
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
