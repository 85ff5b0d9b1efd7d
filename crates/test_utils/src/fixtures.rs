//! Pre-built test fixtures

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The reference scenario's unit price
    pub fn usd_80() -> Money {
        Money::new(dec!(80.00), Currency::USD)
    }

    /// A round USD amount
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}

/// Fixture for tax rates
pub struct TaxFixtures;

impl TaxFixtures {
    /// The standard 10% rate used across scenarios
    pub fn standard_rate() -> Decimal {
        dec!(0.10)
    }
}
