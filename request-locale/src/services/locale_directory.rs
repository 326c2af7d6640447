//! Locale directory listing
//!
//! Every subdirectory of the locale root is a supported locale. Nothing is
//! cached: each call reads the filesystem again.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{LocaleError, LocaleResult};

#[derive(Debug, Clone)]
pub struct LocaleDirectory {
    root: PathBuf,
}

impl LocaleDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the subdirectories under the root.
    ///
    /// Fails if the root itself cannot be read; unreadable entries are skipped.
    pub fn list(&self) -> LocaleResult<BTreeSet<String>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|err| LocaleError::directory_unreadable(&self.root, err))?;

        let locales = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        Ok(locales)
    }

    /// Whether `root/locale` can be read as a directory.
    pub fn contains(&self, locale: &str) -> bool {
        fs::read_dir(self.root.join(locale)).is_ok()
    }

    /// Startup check: the root must exist and be a directory.
    pub fn ensure_root(&self) -> LocaleResult<()> {
        let metadata = fs::metadata(&self.root)
            .map_err(|err| LocaleError::directory_unreadable(&self.root, err))?;

        if !metadata.is_dir() {
            return Err(LocaleError::directory_unreadable(
                &self.root,
                std::io::Error::other("not a directory"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(dirs: &[&str], files: &[&str]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        for dir in dirs {
            fs::create_dir(root.path().join(dir)).unwrap();
        }
        for file in files {
            fs::write(root.path().join(file), "").unwrap();
        }
        root
    }

    #[test]
    fn test_list_only_directories() {
        let root = tree(&["fr-FR", "en-US"], &["README.md"]);
        let directory = LocaleDirectory::new(root.path());

        let locales: Vec<String> = directory.list().unwrap().into_iter().collect();
        assert_eq!(locales, vec!["en-US".to_string(), "fr-FR".to_string()]);
    }

    #[test]
    fn test_list_reflects_filesystem_changes() {
        let root = tree(&["en-US"], &[]);
        let directory = LocaleDirectory::new(root.path());
        assert_eq!(directory.list().unwrap().len(), 1);

        fs::create_dir(root.path().join("de-DE")).unwrap();
        assert!(directory.list().unwrap().contains("de-DE"));
    }

    #[test]
    fn test_list_missing_root_fails() {
        let root = tempfile::tempdir().unwrap();
        let directory = LocaleDirectory::new(root.path().join("missing"));
        assert!(matches!(directory.list(), Err(LocaleError::DirectoryUnreadable { .. })));
    }

    #[test]
    fn test_contains() {
        let root = tree(&["fr-FR"], &["es-ES"]);
        let directory = LocaleDirectory::new(root.path());
        assert!(directory.contains("fr-FR"));
        assert!(!directory.contains("xx-ZZ"));
        // a plain file is not a locale directory
        assert!(!directory.contains("es-ES"));
    }

    #[test]
    fn test_ensure_root() {
        let root = tree(&[], &["file"]);
        assert!(LocaleDirectory::new(root.path()).ensure_root().is_ok());
        assert!(LocaleDirectory::new(root.path().join("file")).ensure_root().is_err());
        assert!(LocaleDirectory::new(root.path().join("nope")).ensure_root().is_err());
    }
}
