// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the playtree workspace.
//!
//! This module defines the root [`PlaytreeError`] type with specific variants
//! for the failure modes of subjects, services and snapshot handling, allowing
//! library users to handle errors appropriately.
//!
//! # Examples
//!
//! ```
//! use playtree_core::{PlaytreeError, Result};
//!
//! fn load_something() -> Result<()> {
//!     Err(PlaytreeError::service_error("backend unreachable"))
//! }
//! ```

/// Root error type for all playtree operations.
#[derive(Debug, thiserror::Error)]
pub enum PlaytreeError {
    /// The subject has been closed.
    ///
    /// Sending to or subscribing on a closed subject fails with this variant.
    #[error("Subject closed")]
    SubjectClosed,

    /// A service-backed operation failed.
    ///
    /// Emitted by stores when an injected service rejects a load; the same
    /// failure is independently reported on the service's event stream.
    #[error("Service error: {context}")]
    ServiceError {
        /// Description of the failed operation
        context: String,
    },

    /// Snapshot construction or serialization failed.
    #[error("Snapshot error: {context}")]
    SnapshotError {
        /// Description of what went wrong with the snapshot
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided service implementations so they
    /// can travel through the playtree error system with their source intact.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PlaytreeError {
    /// Create a service error with the given context.
    pub fn service_error(context: impl Into<String>) -> Self {
        Self::ServiceError {
            context: context.into(),
        }
    }

    /// Create a snapshot error with the given context.
    pub fn snapshot_error(context: impl Into<String>) -> Self {
        Self::SnapshotError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if this error came from a service-backed operation.
    #[must_use]
    pub const fn is_service_error(&self) -> bool {
        matches!(self, Self::ServiceError { .. } | Self::UserError(_))
    }
}

impl Clone for PlaytreeError {
    fn clone(&self) -> Self {
        match self {
            Self::SubjectClosed => Self::SubjectClosed,
            Self::ServiceError { context } => Self::ServiceError {
                context: context.clone(),
            },
            Self::SnapshotError { context } => Self::SnapshotError {
                context: context.clone(),
            },
            // The boxed source is not Clone, so degrade to its message
            Self::UserError(e) => Self::ServiceError {
                context: format!("User error: {e}"),
            },
        }
    }
}

impl From<serde_json::Error> for PlaytreeError {
    fn from(e: serde_json::Error) -> Self {
        Self::SnapshotError {
            context: e.to_string(),
        }
    }
}

/// Specialized Result type for playtree operations.
pub type Result<T> = std::result::Result<T, PlaytreeError>;
