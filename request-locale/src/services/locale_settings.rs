use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LocaleConfig;
use crate::models::LocaleProperty;
use crate::utils::LocaleResult;

/// Shared, process-wide locale settings
///
/// Built once at startup and handed to every resolver. Writes are meant to
/// happen during startup, before traffic; each resolution works on a
/// snapshot so a concurrent write can never tear a single decision.
#[derive(Clone, Debug, Default)]
pub struct LocaleSettings {
    inner: Arc<RwLock<LocaleConfig>>,
}

impl LocaleSettings {
    pub fn new(config: LocaleConfig) -> Self {
        Self { inner: Arc::new(RwLock::new(config)) }
    }

    /// Assign a property. No validation: a bad directory only shows up when it is listed.
    pub fn set(&self, property: LocaleProperty, value: impl Into<String>) {
        let value = value.into();
        tracing::info!("Locale setting {} = {}", property, value);

        let mut config = self.write();
        match property {
            LocaleProperty::Default => config.default_locale = value,
            LocaleProperty::Directory => config.directory = value,
        }
    }

    /// Assign a property by name ("default" or "directory").
    pub fn set_named(&self, name: &str, value: impl Into<String>) -> LocaleResult<()> {
        let property: LocaleProperty = name.parse()?;
        self.set(property, value);
        Ok(())
    }

    pub fn snapshot(&self) -> LocaleConfig {
        self.read().clone()
    }

    pub fn default_locale(&self) -> String {
        self.read().default_locale.clone()
    }

    pub fn directory(&self) -> String {
        self.read().directory.clone()
    }

    // A poisoned lock still holds a complete LocaleConfig; keep serving it
    fn read(&self) -> RwLockReadGuard<'_, LocaleConfig> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocaleConfig> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<LocaleConfig> for LocaleSettings {
    fn from(config: LocaleConfig) -> Self {
        Self::new(config)
    }
}
