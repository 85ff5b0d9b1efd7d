//! Document merge port
//!
//! When a print batch resolves to more than one report, each group renders
//! separately and the outputs are merged into a single document. Merging is
//! container-level: the merged document contains every page of every part,
//! in part order, and its page count is the sum of the parts' counts. The
//! actual container algebra (PDF object renumbering and the like) lives in
//! the external library behind this port.

use crate::engine::RenderedDocument;
use crate::error::ReportingError;

/// Port to an external page-preserving document merger
pub trait DocumentMerger: Send + Sync {
    /// Merges the parts into one document, preserving page order and count
    ///
    /// Callers only invoke this with two or more parts; parts are expected
    /// to share one container format (a mixed-format batch is caller
    /// misuse, not a supported input).
    ///
    /// # Errors
    ///
    /// `ReportingError::MergeFailed` when the parts cannot be combined.
    fn merge(&self, parts: &[RenderedDocument]) -> Result<RenderedDocument, ReportingError>;
}
