//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// Generation has exactly one real failure mode — the filesystem said no.
/// There is no retry policy: generations are one-shot, operator-invoked
/// batch jobs, and a failed run is resolved by re-invocation (the next run
/// wipes the output root first).
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permission denied, disk full, blocked
    /// deletion, path-type collision).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Template rendering produced an unusable tree.
    #[error("Rendering failed: {reason}")]
    Rendering { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Close any program holding files under the output directory".into(),
                "Re-run the command: the output tree is rebuilt from scratch".into(),
            ],
            Self::Rendering { reason } => vec![
                format!("Rendering failed: {}", reason),
                "This points at a broken template registry entry".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::Rendering { .. } => ErrorCategory::Internal,
        }
    }
}
