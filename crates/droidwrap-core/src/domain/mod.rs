//! Core domain layer for Droidwrap.
//!
//! This module contains pure logic with ZERO external dependencies beyond
//! `thiserror`. All I/O is handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: config, context, and tree are built once and read
//! - **Deterministic**: rendering the same config always yields the same text

pub mod config;
pub mod error;
pub mod output_tree;
pub mod template;

// Re-exports for convenience
pub use config::{GenerationConfig, GenerationConfigBuilder, host_of};
pub use error::{DomainError, ErrorCategory};
pub use output_tree::{OutputTree, RenderedFile};
pub use template::{RenderContext, TemplateEntry, render_tree};
