//! Reporting domain errors

use thiserror::Error;

use core_kernel::{PortError, ReportTemplateId};

use crate::template::RenderEngineKind;

/// Errors that can occur in the reporting domain
#[derive(Debug, Error)]
pub enum ReportingError {
    /// No template descriptor with the given id
    #[error("Report template not found: {id}")]
    TemplateNotFound { id: ReportTemplateId },

    /// No engine registered under the template's engine kind
    #[error("No render engine registered for kind {kind:?}")]
    EngineNotRegistered { kind: RenderEngineKind },

    /// The actor may not render this report
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    /// The engine failed to produce output
    #[error("Render failed: {message}")]
    RenderFailed { message: String },

    /// The merger could not combine the rendered parts
    #[error("Merge failed: {message}")]
    MergeFailed { message: String },

    /// A port operation failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ReportingError {
    /// Creates an AccessDenied error
    pub fn access_denied(message: impl Into<String>) -> Self {
        ReportingError::AccessDenied {
            message: message.into(),
        }
    }

    /// Creates a RenderFailed error
    pub fn render_failed(message: impl Into<String>) -> Self {
        ReportingError::RenderFailed {
            message: message.into(),
        }
    }

    /// Creates a MergeFailed error
    pub fn merge_failed(message: impl Into<String>) -> Self {
        ReportingError::MergeFailed {
            message: message.into(),
        }
    }
}
