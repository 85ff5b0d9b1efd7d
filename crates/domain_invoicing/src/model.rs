//! Invoice target-model registration
//!
//! Alternative report associations may only target models listed in the
//! shared catalog. This module contributes the invoice entry.

use core_kernel::ModelRegistry;

/// Stable key of the invoice model in the target-model catalog
pub const INVOICE_MODEL_KEY: &str = "invoice";

/// Registers "Invoice" as a selectable target model
///
/// Idempotent: registering on a catalog that already lists the invoice
/// model leaves a single entry and returns false.
pub fn register_invoice_model(registry: &mut ModelRegistry) -> bool {
    registry.register(INVOICE_MODEL_KEY, "Invoice")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        let mut registry = ModelRegistry::new();
        assert!(register_invoice_model(&mut registry));
        assert!(!register_invoice_model(&mut registry));
        assert_eq!(registry.entries().len(), 1);
        assert!(registry.is_registered(INVOICE_MODEL_KEY));
    }
}
