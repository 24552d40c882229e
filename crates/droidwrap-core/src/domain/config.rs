//! Generation configuration aggregate.
//!
//! [`GenerationConfig`] is the single input record every template is rendered
//! against. It is immutable after construction; all invariants are enforced
//! by [`GenerationConfigBuilder::build`], so a constructed config is always
//! safe to render.
//!
//! ## Invariants
//!
//! - `app_name` and `version_name` are non-empty
//! - `package_name` is reverse-DNS: at least two dot-segments, each starting
//!   with a lowercase letter and containing only `[a-z0-9_]`
//! - `version_code` is strictly positive
//! - `min_sdk <= target_sdk <= compile_sdk`
//! - `server_url` has an http/https scheme and a non-empty host
//! - `domain` equals the host component of `server_url` (derived from the
//!   URL when not supplied)

use serde::Serialize;

use crate::domain::error::DomainError;

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    app_name: String,
    package_name: String,
    version_code: u32,
    version_name: String,
    min_sdk: u32,
    target_sdk: u32,
    compile_sdk: u32,
    server_url: String,
    domain: String,
}

impl GenerationConfig {
    /// Start building a configuration.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    pub fn min_sdk(&self) -> u32 {
        self.min_sdk
    }

    pub fn target_sdk(&self) -> u32 {
        self.target_sdk
    }

    pub fn compile_sdk(&self) -> u32 {
        self.compile_sdk
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The package name as a directory path (`com.example.app` →
    /// `com/example/app`), used for the Java source tree.
    pub fn package_path(&self) -> String {
        self.package_name.replace('.', "/")
    }

    /// Android style-name fragment derived from the app name.
    ///
    /// Style names cannot carry whitespace or punctuation, so everything but
    /// ASCII alphanumerics is stripped (`"My Clinic"` → `"MyClinic"`).
    pub fn theme_name(&self) -> String {
        let theme: String = self
            .app_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if theme.is_empty() {
            "App".to_string()
        } else {
            theme
        }
    }
}

/// Builder for [`GenerationConfig`].
///
/// `app_name`, `package_name`, and `server_url` must be supplied; everything
/// else has release-sensible defaults (version 1 / "1.0.0", SDK 24/34/34).
/// Validation happens once, in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct GenerationConfigBuilder {
    app_name: Option<String>,
    package_name: Option<String>,
    version_code: Option<u32>,
    version_name: Option<String>,
    min_sdk: Option<u32>,
    target_sdk: Option<u32>,
    compile_sdk: Option<u32>,
    server_url: Option<String>,
    domain: Option<String>,
}

impl GenerationConfigBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn version_code(mut self, code: u32) -> Self {
        self.version_code = Some(code);
        self
    }

    pub fn version_name(mut self, name: impl Into<String>) -> Self {
        self.version_name = Some(name.into());
        self
    }

    pub fn min_sdk(mut self, level: u32) -> Self {
        self.min_sdk = Some(level);
        self
    }

    pub fn target_sdk(mut self, level: u32) -> Self {
        self.target_sdk = Some(level);
        self
    }

    pub fn compile_sdk(mut self, level: u32) -> Self {
        self.compile_sdk = Some(level);
        self
    }

    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Explicit domain override. When omitted, the domain is derived from the
    /// host component of the server URL.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Validate all fields and produce the immutable configuration.
    pub fn build(self) -> Result<GenerationConfig, DomainError> {
        let app_name = self
            .app_name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DomainError::EmptyAppName)?;

        let package_name = self.package_name.unwrap_or_default();
        validate_package_name(&package_name)?;

        let version_code = self.version_code.unwrap_or(1);
        if version_code == 0 {
            return Err(DomainError::InvalidVersionCode);
        }

        let version_name = self.version_name.unwrap_or_else(|| "1.0.0".to_string());
        if version_name.trim().is_empty() {
            return Err(DomainError::EmptyVersionName);
        }

        let min_sdk = self.min_sdk.unwrap_or(24);
        let target_sdk = self.target_sdk.unwrap_or(34);
        let compile_sdk = self.compile_sdk.unwrap_or(34);
        if min_sdk > target_sdk || target_sdk > compile_sdk {
            return Err(DomainError::InvalidSdkRange {
                min_sdk,
                target_sdk,
                compile_sdk,
            });
        }

        let server_url = self.server_url.unwrap_or_default();
        let host = host_of(&server_url).ok_or_else(|| DomainError::InvalidServerUrl {
            url: server_url.clone(),
            reason: "expected an http(s) URL with a host".into(),
        })?;

        let domain = match self.domain {
            Some(domain) if domain != host => {
                return Err(DomainError::DomainMismatch {
                    domain,
                    url: server_url.clone(),
                    host: host.to_string(),
                });
            }
            Some(domain) => domain,
            None => host.to_string(),
        };

        Ok(GenerationConfig {
            app_name,
            package_name,
            version_code,
            version_name,
            min_sdk,
            target_sdk,
            compile_sdk,
            server_url,
            domain,
        })
    }
}

/// Extract the host component of an http(s) URL.
///
/// Returns `None` when the scheme is missing/unsupported or the host is
/// empty. Userinfo and port are stripped; the path, query, and fragment are
/// ignored.
pub fn host_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);

    if host.is_empty() { None } else { Some(host) }
}

fn validate_package_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() < 2 {
        return Err(invalid("expected at least two dot-separated segments"));
    }

    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return Err(invalid("each segment must start with a lowercase letter")),
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(invalid("segments may only contain [a-z0-9_]"));
        }
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
