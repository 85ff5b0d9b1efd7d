//! Target-model registry
//!
//! Central catalog of the business-document models that alternative report
//! associations may target. Domain crates register their model here at
//! assembly time; association validation asks `is_registered` instead of
//! reflecting over model names.
//!
//! # Usage
//!
//! ```rust
//! use core_kernel::registry::ModelRegistry;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register("invoice", "Invoice");
//! registry.register("invoice", "Invoice"); // second call is a no-op
//! assert!(registry.is_registered("invoice"));
//! assert_eq!(registry.entries().len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// One selectable target model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Stable model key, e.g. `"invoice"`
    pub key: String,
    /// Human-readable label shown in selection widgets
    pub label: String,
}

/// Ordered, duplicate-free catalog of registered target models
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
}

impl ModelRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a target model
    ///
    /// Registration is idempotent: registering a key that is already present
    /// leaves the catalog unchanged and returns false.
    pub fn register(&mut self, key: impl Into<String>, label: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_registered(&key) {
            return false;
        }
        self.entries.push(ModelEntry {
            key,
            label: label.into(),
        });
        true
    }

    /// Returns true if the key names a registered model
    pub fn is_registered(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Returns the label for a registered key
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    /// Returns all entries in registration order
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }
}
