//! Party domain errors

use core_kernel::AssociationId;
use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// The association targets a model that is not in the catalog
    #[error("Unknown target model: {model_key}")]
    UnknownTargetModel { model_key: String },

    /// The party already holds this (model, report) pair
    #[error("Duplicate alternative report association for model {model_key}")]
    DuplicateAssociation { model_key: String },

    /// No association with the given id
    #[error("Alternative report association not found: {id}")]
    AssociationNotFound { id: AssociationId },

    /// Entity-level validation failed
    #[error("Validation error: {0}")]
    Validation(String),
}
