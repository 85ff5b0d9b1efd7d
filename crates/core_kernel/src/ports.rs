//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal architecture used across the domain
//! modules. Each domain defines its own port traits (persistence, rendering
//! collaborators); adapters implement them. Application services receive
//! ports as `Arc<dyn Port>` and never know which adapter is behind them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Error type for port operations
///
/// A unified error type that all port implementations use, so domain
/// services see consistent failures regardless of the adapter behind a port.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        PortError::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so implementations are thread-safe and
/// usable in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Who initiated an operation
///
/// Cache fills performed by the renderer are system-attributed so adapters
/// can let them through without re-running user access validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Actor {
    /// A named end user
    User(String),
    /// The system itself (scheduled jobs, internal cache writes)
    System,
}

impl Actor {
    /// Returns true for system-attributed operations
    pub fn is_system(&self) -> bool {
        matches!(self, Actor::System)
    }
}

/// Metadata attached to port operations for tracing and audit attribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationMetadata {
    /// Correlation id for the enclosing request
    pub request_id: Uuid,
    /// Who initiated the operation
    pub actor: Actor,
    /// When the operation was issued
    pub issued_at: DateTime<Utc>,
}

impl OperationMetadata {
    /// Creates metadata for a user-initiated operation
    pub fn for_user(name: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            actor: Actor::User(name.into()),
            issued_at: Utc::now(),
        }
    }

    /// Creates metadata for a system-initiated operation
    pub fn system() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            actor: Actor::System,
            issued_at: Utc::now(),
        }
    }
}

/// Health status of an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

/// Result of an adapter health check
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    /// Identifier of the checked adapter
    pub adapter_id: String,
    /// Reported status
    pub status: AdapterHealth,
    /// Time the check took
    pub latency_ms: u64,
}

/// Trait for adapters that can report their own health
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}
