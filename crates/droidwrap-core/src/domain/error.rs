use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping in higher layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Validation Errors
    // ========================================================================
    #[error("application name must not be empty")]
    EmptyAppName,

    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("domain '{domain}' does not match the host of '{url}' ({host})")]
    DomainMismatch {
        domain: String,
        url: String,
        host: String,
    },

    #[error("version code must be a positive integer")]
    InvalidVersionCode,

    #[error("version name must not be empty")]
    EmptyVersionName,

    #[error("invalid SDK levels: min {min_sdk} <= target {target_sdk} <= compile {compile_sdk} must hold")]
    InvalidSdkRange {
        min_sdk: u32,
        target_sdk: u32,
        compile_sdk: u32,
    },

    // ========================================================================
    // Template / Output Tree Errors
    // ========================================================================
    #[error("duplicate output path: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("template registry produced an empty output tree")]
    EmptyTree,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyAppName => vec![
                "Provide an application name with --app-name".into(),
                "Example: --app-name \"My Clinic\"".into(),
            ],
            Self::InvalidPackageName { name, .. } => vec![
                format!("'{}' is not a valid Android package name", name),
                "Use reverse-DNS notation with at least two segments".into(),
                "Each segment must start with a lowercase letter and contain only [a-z0-9_]".into(),
                "Example: --package com.example.myapp".into(),
            ],
            Self::InvalidServerUrl { url, .. } => vec![
                format!("'{}' is not a usable server URL", url),
                "The URL must start with http:// or https:// and name a host".into(),
                "Example: --url https://www.example.com/home".into(),
            ],
            Self::DomainMismatch { host, .. } => vec![
                format!("Expected domain: {}", host),
                "Omit --domain to derive it from the server URL automatically".into(),
            ],
            Self::InvalidVersionCode => vec![
                "Version codes start at 1 and increase with every release".into(),
                "Example: --version-code 2".into(),
            ],
            Self::InvalidSdkRange { .. } => vec![
                "Check --min-sdk, --target-sdk, and --compile-sdk".into(),
                "A common choice is 24 / 34 / 34".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two template entries render to '{}'", path),
                "Check the template registry for conflicting entries".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyTree => {
                ErrorCategory::Internal
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
