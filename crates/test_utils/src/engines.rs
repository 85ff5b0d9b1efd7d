//! Stub rendering collaborators
//!
//! The recording engine produces a deterministic line-oriented envelope so
//! tests can assert on grouping and page order without a real document
//! container:
//!
//! ```text
//! doc <template-id>
//! page <record-uuid>
//! page <record-uuid>
//! ```
//!
//! The envelope merger concatenates envelopes and sums their page counts,
//! which is exactly the page-preserving contract the real merger honors.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use core_kernel::{OperationMetadata, ReportTemplateId};
use domain_reporting::{
    DocumentMerger, RenderedDocument, ReportAccessControl, ReportEngine, ReportTemplate,
    ReportingError,
};

/// One recorded engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    /// Template the engine was asked to render
    pub template: ReportTemplateId,
    /// Records in the group, in order
    pub record_ids: Vec<Uuid>,
}

/// Engine stub that records every invocation
///
/// Renders one page per record; the cache fast-path tests assert on
/// `call_count` staying flat.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingEngine {
    /// Creates an engine with an empty call log
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of render invocations so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    /// Snapshot of the recorded invocations
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

/// Builds the deterministic envelope for a template over records
pub fn envelope(template: ReportTemplateId, record_ids: &[Uuid]) -> Vec<u8> {
    let mut text = format!("doc {template}\n");
    for id in record_ids {
        text.push_str(&format!("page {id}\n"));
    }
    text.into_bytes()
}

#[async_trait]
impl ReportEngine for RecordingEngine {
    async fn render(
        &self,
        template: &ReportTemplate,
        record_ids: &[Uuid],
    ) -> Result<RenderedDocument, ReportingError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(RenderCall {
                template: template.id,
                record_ids: record_ids.to_vec(),
            });
        Ok(RenderedDocument {
            format: template.output,
            bytes: envelope(template.id, record_ids),
            pages: record_ids.len() as u32,
        })
    }
}

/// Engine stub that always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEngine;

#[async_trait]
impl ReportEngine for FailingEngine {
    async fn render(
        &self,
        template: &ReportTemplate,
        _record_ids: &[Uuid],
    ) -> Result<RenderedDocument, ReportingError> {
        Err(ReportingError::render_failed(format!(
            "engine unavailable for template {}",
            template.id
        )))
    }
}

/// Merger for the stub envelope format
///
/// Concatenates the parts in order and sums their page counts. The merged
/// format is the last part's, matching the declared-format rule of the
/// batch renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeMerger;

impl DocumentMerger for EnvelopeMerger {
    fn merge(&self, parts: &[RenderedDocument]) -> Result<RenderedDocument, ReportingError> {
        let last = parts
            .last()
            .ok_or_else(|| ReportingError::merge_failed("nothing to merge"))?;
        let mut bytes = Vec::new();
        let mut pages = 0;
        for part in parts {
            bytes.extend_from_slice(&part.bytes);
            pages += part.pages;
        }
        Ok(RenderedDocument {
            format: last.format,
            bytes,
            pages,
        })
    }
}

/// Access control that denies every render
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllAccess;

#[async_trait]
impl ReportAccessControl for DenyAllAccess {
    async fn check_render(
        &self,
        template: &ReportTemplate,
        _record_ids: &[Uuid],
        _metadata: Option<&OperationMetadata>,
    ) -> Result<(), ReportingError> {
        Err(ReportingError::access_denied(format!(
            "render of {} refused",
            template.id
        )))
    }
}
