//! Unified error handling for Droidwrap Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Droidwrap Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// droidwrap-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum DroidwrapError {
    /// Errors from the domain layer (configuration validation).
    #[error("Invalid configuration: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (generation failures).
    #[error("Generation failed: {0}")]
    Application(#[from] ApplicationError),
}

impl DroidwrapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type DroidwrapResult<T> = Result<T, DroidwrapError>;
