// Common test utilities and helpers

use std::fs;

use tempfile::TempDir;

use crate::config::LocaleConfig;
use crate::services::{LocaleResolver, LocaleSettings};

/// A temporary working directory with an `i18n/` locale tree
pub struct LocaleTree {
    pub base: TempDir,
}

impl LocaleTree {
    pub fn root(&self) -> std::path::PathBuf {
        self.base.path().join("i18n")
    }

    pub fn add_locale(&self, locale: &str) {
        fs::create_dir_all(self.root().join(locale)).expect("Failed to create locale directory");
    }

    pub fn remove_locale(&self, locale: &str) {
        fs::remove_dir_all(self.root().join(locale)).expect("Failed to remove locale directory");
    }
}

/// Create `<tmp>/i18n/<locale>` for every given locale
pub fn create_locale_tree(locales: &[&str]) -> LocaleTree {
    let base = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(base.path().join("i18n")).expect("Failed to create locale root");

    let tree = LocaleTree { base };
    for locale in locales {
        tree.add_locale(locale);
    }
    tree
}

/// Settings with default "en-US" and directory "/i18n/" anchored at the tree
pub fn create_test_settings(tree: &LocaleTree) -> LocaleSettings {
    LocaleSettings::new(LocaleConfig {
        base_dir: Some(tree.base.path().to_path_buf()),
        ..LocaleConfig::default()
    })
}

/// Resolver over `fr-FR` and `en-US`, the usual fixture
pub fn create_test_resolver() -> (LocaleTree, LocaleResolver) {
    let tree = create_locale_tree(&["fr-FR", "en-US"]);
    let resolver =
        LocaleResolver::new(create_test_settings(&tree)).expect("Failed to create resolver");
    (tree, resolver)
}
