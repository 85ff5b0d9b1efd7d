//! Alternative report associations
//!
//! A party may be configured with preferred report templates for specific
//! business-document models. Each association pairs a registered target
//! model with a report template; invoice report resolution only considers
//! associations whose model key equals the invoice model.

use serde::{Deserialize, Serialize};

use core_kernel::{AssociationId, ModelRegistry, ReportTemplateId};

use crate::error::PartyError;

/// A party-scoped mapping from a target model to a preferred report template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeReportAssociation {
    /// Unique identifier
    pub id: AssociationId,
    /// Key of the targeted business-document model (must be registered)
    pub model_key: String,
    /// The preferred report template
    pub report: ReportTemplateId,
}

impl AlternativeReportAssociation {
    /// Creates an association after checking the model key against the catalog
    ///
    /// # Errors
    ///
    /// `PartyError::UnknownTargetModel` when the key is not registered.
    pub fn new(
        registry: &ModelRegistry,
        model_key: impl Into<String>,
        report: ReportTemplateId,
    ) -> Result<Self, PartyError> {
        let model_key = model_key.into();
        if !registry.is_registered(&model_key) {
            return Err(PartyError::UnknownTargetModel { model_key });
        }
        Ok(Self {
            id: AssociationId::new(),
            model_key,
            report,
        })
    }

    /// Returns true if this association targets the given model
    pub fn targets(&self, model_key: &str) -> bool {
        self.model_key == model_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register("invoice", "Invoice");
        registry
    }

    #[test]
    fn rejects_unregistered_model() {
        let err = AlternativeReportAssociation::new(
            &registry(),
            "purchase_order",
            ReportTemplateId::new(),
        )
        .unwrap_err();
        match err {
            PartyError::UnknownTargetModel { model_key } => {
                assert_eq!(model_key, "purchase_order")
            }
            other => panic!("expected UnknownTargetModel, got {other:?}"),
        }
    }

    #[test]
    fn accepts_registered_model() {
        let assoc =
            AlternativeReportAssociation::new(&registry(), "invoice", ReportTemplateId::new())
                .unwrap();
        assert!(assoc.targets("invoice"));
        assert!(!assoc.targets("credit_note"));
    }
}
