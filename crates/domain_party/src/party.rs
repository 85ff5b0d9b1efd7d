//! Party entity
//!
//! A party is any business entity the company invoices or is invoiced by.
//! Besides contact data, a party owns an ordered collection of alternative
//! report associations which drive invoice report resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ModelRegistry, PartyId, ReportTemplateId};

use crate::alternative_report::AlternativeReportAssociation;
use crate::error::PartyError;

/// A business partner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Party {
    /// Unique identifier
    pub id: PartyId,
    /// Display name
    #[validate(length(min = 1, message = "party name must not be empty"))]
    pub name: String,
    /// Contact email, if known
    #[validate(email)]
    pub email: Option<String>,
    /// Whether the party is active
    pub active: bool,
    /// Alternative report associations owned by this party
    pub alternative_reports: Vec<AlternativeReportAssociation>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Party {
    /// Creates a new active party with no associations
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PartyId::new_v7(),
            name: name.into(),
            email: None,
            active: true,
            alternative_reports: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds an alternative report association for a registered target model
    ///
    /// The same (model, report) pair may only appear once per party.
    ///
    /// # Errors
    ///
    /// `PartyError::UnknownTargetModel` for an unregistered model key,
    /// `PartyError::DuplicateAssociation` when the pair already exists.
    pub fn add_alternative_report(
        &mut self,
        registry: &ModelRegistry,
        model_key: impl Into<String>,
        report: ReportTemplateId,
    ) -> Result<core_kernel::AssociationId, PartyError> {
        let association = AlternativeReportAssociation::new(registry, model_key, report)?;
        if self
            .alternative_reports
            .iter()
            .any(|a| a.model_key == association.model_key && a.report == association.report)
        {
            return Err(PartyError::DuplicateAssociation {
                model_key: association.model_key,
            });
        }
        let id = association.id;
        self.alternative_reports.push(association);
        self.updated_at = Utc::now();
        Ok(id)
    }

    /// Removes an association by id; errors when it does not exist
    pub fn remove_alternative_report(
        &mut self,
        id: core_kernel::AssociationId,
    ) -> Result<AlternativeReportAssociation, PartyError> {
        let pos = self
            .alternative_reports
            .iter()
            .position(|a| a.id == id)
            .ok_or(PartyError::AssociationNotFound { id })?;
        self.updated_at = Utc::now();
        Ok(self.alternative_reports.remove(pos))
    }

    /// Projects the associations targeting `model_key` to report templates
    ///
    /// Duplicate reports collapse; first-encounter order is kept.
    pub fn reports_for_model(&self, model_key: &str) -> Vec<ReportTemplateId> {
        let mut reports = Vec::new();
        for association in &self.alternative_reports {
            if association.targets(model_key) && !reports.contains(&association.report) {
                reports.push(association.report);
            }
        }
        reports
    }
}
