//! Scaffold Service - main application orchestrator.
//!
//! This service runs the entire generation workflow:
//! 1. Render every template entry against the config (pure, no I/O)
//! 2. Wipe whatever occupies the output root
//! 3. Create the root and every required parent directory
//! 4. Write each rendered file
//!
//! The pass is strictly ordered and fully synchronous: files are written only
//! after the old tree is gone and their parent directories exist. There is no
//! rollback — a failed run leaves already-written files as debugging
//! evidence, and the next run regenerates cleanly because step 2 wipes prior
//! state.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{GenerationConfig, RenderContext, TemplateEntry, render_tree},
    error::{DroidwrapError, DroidwrapResult},
};

/// Summary of one completed generation, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// The output root that was (re)created.
    pub root: PathBuf,
    /// Written files, relative to the root, in registry order.
    pub files: Vec<PathBuf>,
    /// The URL the generated app will load.
    pub server_url: String,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Main generation service.
///
/// Owns the filesystem port; rendering needs no port because it is pure.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a complete project tree at `root`.
    ///
    /// Any prior tree at `root` is destroyed first — generation is idempotent
    /// by full replacement, not by diffing. Every failure is fatal and
    /// surfaced to the caller immediately; nothing is retried.
    #[instrument(
        skip_all,
        fields(
            app = %config.app_name(),
            root = %root.display(),
        )
    )]
    pub fn generate(
        &self,
        config: &GenerationConfig,
        entries: &[TemplateEntry],
        root: &Path,
    ) -> DroidwrapResult<GenerationReport> {
        info!(url = config.server_url(), "Generating Android project");

        // 1. Render everything up front. Pure and infallible for a valid
        //    config, so the old tree survives a broken registry.
        let ctx = RenderContext::from_config(config);
        let tree = render_tree(entries, &ctx, root).map_err(DroidwrapError::Domain)?;

        // 2. Full replacement: clear whatever is at the root.
        self.clear_root(root)?;

        // 3. All directories before any file.
        self.filesystem.create_dir_all(root)?;
        for dir in tree.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        // 4. Write files in registry order.
        let mut files = Vec::with_capacity(tree.file_count());
        for file in tree.files() {
            self.filesystem
                .write_file(&root.join(&file.path), &file.content)?;
            info!(path = %file.path.display(), bytes = file.size(), "file written");
            files.push(file.path.clone());
        }

        info!(files = files.len(), "Generation completed");

        Ok(GenerationReport {
            root: root.to_path_buf(),
            files,
            server_url: config.server_url().to_string(),
        })
    }

    /// Remove whatever occupies the output root.
    ///
    /// A directory is removed recursively; a plain file (or symlink) with
    /// `remove_file`. A blocked deletion aborts the generation before any
    /// template output is written.
    fn clear_root(&self, root: &Path) -> DroidwrapResult<()> {
        if !self.filesystem.exists(root) {
            return Ok(());
        }

        if self.filesystem.is_dir(root) {
            warn!(path = %root.display(), "removing previous output tree");
            self.filesystem.remove_dir_all(root)
        } else {
            warn!(path = %root.display(), "output path occupied by a file, removing");
            self.filesystem.remove_file(root)
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use mockall::Sequence;

    const ENTRIES: &[TemplateEntry] = &[
        TemplateEntry::new("build.gradle", "// root build"),
        TemplateEntry::new(
            "app/src/main/java/{{PACKAGE_PATH}}/MainActivity.java",
            "package {{PACKAGE_NAME}};",
        ),
    ];

    fn config() -> GenerationConfig {
        GenerationConfig::builder()
            .app_name("Example Hospital")
            .package_name("test.hospital.app")
            .server_url("https://www.example-hospital.test/home")
            .build()
            .unwrap()
    }

    fn denied(path: &str) -> DroidwrapError {
        ApplicationError::Filesystem {
            path: path.into(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn fresh_root_skips_removal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .generate(&config(), ENTRIES, Path::new("/out"))
            .unwrap();

        assert_eq!(report.file_count(), 2);
        assert_eq!(report.server_url, "https://www.example-hospital.test/home");
    }

    #[test]
    fn existing_directory_is_wiped_before_writes() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();

        fs.expect_exists()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);
        fs.expect_is_dir()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);
        fs.expect_remove_dir_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        assert!(
            service
                .generate(&config(), ENTRIES, Path::new("/out"))
                .is_ok()
        );
    }

    #[test]
    fn file_collision_at_root_is_cleared_with_remove_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_remove_file().times(1).returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        assert!(
            service
                .generate(&config(), ENTRIES, Path::new("/out"))
                .is_ok()
        );
    }

    // A blocked deletion is fatal: no directory is created and no template
    // output is written. Any such call would hit an expectation-less mock
    // and fail the test.
    #[test]
    fn blocked_removal_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_remove_file().times(1).returning(|_| Err(denied("/out")));

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .generate(&config(), ENTRIES, Path::new("/out"))
            .unwrap_err();

        assert!(matches!(
            err,
            DroidwrapError::Application(ApplicationError::Filesystem { .. })
        ));
    }

    #[test]
    fn write_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .returning(|_, _| Err(denied("/out/build.gradle")));

        let service = ScaffoldService::new(Box::new(fs));
        assert!(
            service
                .generate(&config(), ENTRIES, Path::new("/out"))
                .is_err()
        );
    }

    #[test]
    fn report_lists_files_in_registry_order() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .generate(&config(), ENTRIES, Path::new("/out"))
            .unwrap();

        assert_eq!(report.files[0], PathBuf::from("build.gradle"));
        assert_eq!(
            report.files[1],
            PathBuf::from("app/src/main/java/test/hospital/app/MainActivity.java")
        );
    }
}
