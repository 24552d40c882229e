//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `droidwrap-adapters` implement
//! these.

use std::path::Path;

use crate::error::DroidwrapResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `droidwrap_adapters::filesystem::LocalFilesystem` (production)
/// - `droidwrap_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Directory creation is idempotent — creating an existing directory is a
///   no-op, never an error
/// - Writes are unconditional overwrites; partial-write detection is left to
///   the underlying filesystem
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DroidwrapResult<()>;

    /// Write content to a file, overwriting any previous content.
    fn write_file(&self, path: &Path, content: &str) -> DroidwrapResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DroidwrapResult<()>;

    /// Remove a single non-directory file.
    fn remove_file(&self, path: &Path) -> DroidwrapResult<()>;
}
