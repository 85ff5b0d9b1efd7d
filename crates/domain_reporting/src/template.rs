//! Report templates
//!
//! A report template describes one renderable document layout: which engine
//! renders it, what it produces, and which business-document model it
//! targets. Template lifecycles are owned elsewhere; this core only
//! references them by id and reads their descriptors through the catalog.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ReportTemplateId;

/// Stable identifier of the engine that renders a template
///
/// Keys into the [`crate::engine::RenderEngineRegistry`]; adding an engine
/// means registering an implementation under a new kind, not reflecting
/// over type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderEngineKind {
    /// The standard batch-oriented document engine
    Standard,
    /// The HTML-capable engine used by the single-invoice path
    Html,
}

/// Output container format of a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Html,
    Odt,
}

impl OutputFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html => "html",
            OutputFormat::Odt => "odt",
        }
    }
}

/// Descriptor of one report template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReportTemplate {
    /// Unique identifier
    pub id: ReportTemplateId,
    /// Display name, also used as the rendered document's name
    #[validate(length(min = 1, message = "template name must not be empty"))]
    pub name: String,
    /// Engine that renders this template
    pub engine: RenderEngineKind,
    /// Container format the engine produces for this template
    pub output: OutputFormat,
    /// Key of the model this template renders
    pub model_key: String,
    /// Inactive templates are excluded from default-report lookup
    pub active: bool,
    /// Whether documents from this template go straight to the printer
    pub direct_print: bool,
}

impl ReportTemplate {
    /// Creates an active template
    pub fn new(
        name: impl Into<String>,
        engine: RenderEngineKind,
        output: OutputFormat,
        model_key: impl Into<String>,
    ) -> Self {
        Self {
            id: ReportTemplateId::new_v7(),
            name: name.into(),
            engine,
            output,
            model_key: model_key.into(),
            active: true,
            direct_print: false,
        }
    }

    /// Returns true if this template renders the given model
    pub fn renders(&self, model_key: &str) -> bool {
        self.model_key == model_key
    }
}
