use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::LocaleError;

/// Locale decision attached to every request that passes the locale middleware
///
/// `lang` is `None` when nothing beyond the default applies; handlers should
/// then fall back to `default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLocale {
    pub default: String,
    pub directory: String,
    pub lang: Option<String>,
}

impl RequestLocale {
    /// The locale to serve: the resolved `lang`, or the default.
    pub fn effective(&self) -> &str {
        self.lang.as_deref().unwrap_or(&self.default)
    }
}

/// Configurable locale properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleProperty {
    /// Fallback locale used when nothing else applies
    Default,
    /// Directory (relative to the base dir) whose subdirectories are the supported locales
    Directory,
}

impl FromStr for LocaleProperty {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "defaultLocale" => Ok(Self::Default),
            "directory" | "directoryRoot" => Ok(Self::Directory),
            other => Err(LocaleError::unknown_property(other)),
        }
    }
}

impl fmt::Display for LocaleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Directory => write!(f, "directory"),
        }
    }
}
