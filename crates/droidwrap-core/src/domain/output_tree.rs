use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Rendered output tree ready for materialization.
///
/// This is the output of template rendering: a root path plus the ordered
/// files to write beneath it. It contains no business logic, only data.
/// A fresh tree is built for every generation — there is no merging with or
/// diffing against whatever is already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTree {
    root: PathBuf,
    files: Vec<RenderedFile>,
}

impl OutputTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(RenderedFile {
            path: path.into(),
            content,
        });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Every directory that must exist before the files are written: the
    /// full ancestor chain of each file, relative to the root, deduplicated
    /// and sorted so parents precede children.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .files
            .iter()
            .flat_map(|f| f.path.ancestors().skip(1))
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        dirs.sort();
        dirs
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyTree);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }
}

/// A single file to write: path relative to the tree root, final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(paths: &[&str]) -> OutputTree {
        let mut tree = OutputTree::new("/out");
        for p in paths {
            tree.push(*p, String::new());
        }
        tree
    }

    #[test]
    fn validate_accepts_distinct_relative_paths() {
        let tree = tree_with(&["a.txt", "dir/b.txt"]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicates() {
        let tree = tree_with(&["a.txt", "a.txt"]);
        assert!(matches!(
            tree.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn validate_rejects_absolute_paths() {
        let tree = tree_with(&["/etc/passwd"]);
        assert!(matches!(
            tree.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_tree() {
        let tree = OutputTree::new("/out");
        assert_eq!(tree.validate(), Err(DomainError::EmptyTree));
    }

    #[test]
    fn directories_deduplicate_and_sort() {
        let tree = tree_with(&[
            "app/src/main/res/values/strings.xml",
            "app/src/main/res/values/colors.xml",
            "build.gradle",
            "app/build.gradle",
        ]);

        let dirs = tree.directories();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("app"),
                PathBuf::from("app/src"),
                PathBuf::from("app/src/main"),
                PathBuf::from("app/src/main/res"),
                PathBuf::from("app/src/main/res/values"),
            ]
        );
    }
}
