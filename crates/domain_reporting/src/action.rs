//! Print action descriptors
//!
//! The print wizard asks which display action to run for a document. The
//! descriptor carries everything the wizard needs: the template to execute,
//! the name to show, and whether output should bypass the preview and go
//! straight to the printer.

use serde::{Deserialize, Serialize};

use core_kernel::ReportTemplateId;

use crate::template::ReportTemplate;

/// A display action for the print wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintAction {
    /// The template the action executes
    pub report: ReportTemplateId,
    /// Name shown in the wizard and used for the produced file
    pub name: String,
    /// Send output directly to the printer
    pub direct_print: bool,
}

impl PrintAction {
    /// Builds the action descriptor for a template
    pub fn for_template(template: &ReportTemplate) -> Self {
        Self {
            report: template.id,
            name: template.name.clone(),
            direct_print: template.direct_print,
        }
    }
}
