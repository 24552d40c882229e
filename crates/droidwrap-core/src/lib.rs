//! Droidwrap Core - domain and application layers
//!
//! This crate provides the domain and application layers for the Droidwrap
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         droidwrap-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    droidwrap-adapters (Infrastructure)  │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   built-in template registry)           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (GenerationConfig, TemplateEntry,       │
//! │  RenderContext, OutputTree)             │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use droidwrap_core::{
//!     application::ScaffoldService,
//!     domain::GenerationConfig,
//! };
//!
//! // 1. Build a validated configuration
//! let config = GenerationConfig::builder()
//!     .app_name("Example Hospital")
//!     .package_name("test.hospital.app")
//!     .server_url("https://www.example-hospital.test/home")
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = ScaffoldService::new(filesystem);
//! let report = service.generate(&config, entries, "./android-webview".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ScaffoldService, ports::Filesystem,
    };
    pub use crate::domain::{
        GenerationConfig, GenerationConfigBuilder, OutputTree, RenderContext, RenderedFile,
        TemplateEntry, render_tree,
    };
    pub use crate::error::{DroidwrapError, DroidwrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
