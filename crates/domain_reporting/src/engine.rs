//! Render engine port and registry
//!
//! Engines are external systems that turn a template plus a batch of record
//! ids into document bytes. The registry maps stable engine identifiers to
//! implementations; resolution failures surface as
//! [`ReportingError::EngineNotRegistered`] instead of a reflective lookup
//! blowing up somewhere downstream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ReportingError;
use crate::template::{OutputFormat, RenderEngineKind, ReportTemplate};

/// Output of one engine invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Container format of `bytes`
    pub format: OutputFormat,
    /// The document payload
    pub bytes: Vec<u8>,
    /// Number of pages in the document
    pub pages: u32,
}

/// Port to an external rendering engine
#[async_trait]
pub trait ReportEngine: Send + Sync + std::fmt::Debug {
    /// Renders `template` over the given records in one document
    ///
    /// # Errors
    ///
    /// `ReportingError::RenderFailed` when the engine cannot produce output.
    async fn render(
        &self,
        template: &ReportTemplate,
        record_ids: &[Uuid],
    ) -> Result<RenderedDocument, ReportingError>;
}

/// Maps engine identifiers to engine implementations
///
/// Assembled once at application startup; services resolve engines through
/// it per render call.
#[derive(Clone, Default)]
pub struct RenderEngineRegistry {
    engines: HashMap<RenderEngineKind, Arc<dyn ReportEngine>>,
}

impl RenderEngineRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an engine under its identifier, replacing any previous one
    pub fn register(&mut self, kind: RenderEngineKind, engine: Arc<dyn ReportEngine>) {
        self.engines.insert(kind, engine);
    }

    /// Resolves the engine for a template
    ///
    /// # Errors
    ///
    /// `ReportingError::EngineNotRegistered` when no engine was registered
    /// under the template's engine kind.
    pub fn resolve(&self, kind: RenderEngineKind) -> Result<Arc<dyn ReportEngine>, ReportingError> {
        self.engines
            .get(&kind)
            .cloned()
            .ok_or(ReportingError::EngineNotRegistered { kind })
    }
}

impl std::fmt::Debug for RenderEngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderEngineRegistry")
            .field("kinds", &self.engines.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NullEngine;

    #[async_trait]
    impl ReportEngine for NullEngine {
        async fn render(
            &self,
            template: &ReportTemplate,
            record_ids: &[Uuid],
        ) -> Result<RenderedDocument, ReportingError> {
            Ok(RenderedDocument {
                format: template.output,
                bytes: Vec::new(),
                pages: record_ids.len() as u32,
            })
        }
    }

    #[test]
    fn resolve_unregistered_kind_fails() {
        let registry = RenderEngineRegistry::new();
        let err = registry.resolve(RenderEngineKind::Standard).unwrap_err();
        assert!(matches!(err, ReportingError::EngineNotRegistered { .. }));
    }

    #[tokio::test]
    async fn resolve_returns_registered_engine() {
        let mut registry = RenderEngineRegistry::new();
        registry.register(RenderEngineKind::Standard, Arc::new(NullEngine));

        let template = ReportTemplate::new(
            "Invoice",
            RenderEngineKind::Standard,
            OutputFormat::Pdf,
            "invoice",
        );
        let engine = registry.resolve(RenderEngineKind::Standard).unwrap();
        let rendered = engine
            .render(&template, &[Uuid::new_v4(), Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(rendered.pages, 2);
        assert_eq!(rendered.format, OutputFormat::Pdf);
    }
}
