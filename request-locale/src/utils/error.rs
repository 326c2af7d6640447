use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or resolving request locales
///
/// Most resolution problems never surface here: absent headers, unknown
/// cookies and unsupported tags all degrade to the default locale. Only
/// conditions the caller has to know about are represented.
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Locale directory {path} is not readable: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown locale property: {0}")]
    UnknownProperty(String),

    #[error("Invalid cookie name '{name}': {source}")]
    InvalidCookieName {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Locale resolution aborted: {0}")]
    ResolutionAborted(String),
}

impl LocaleError {
    /// Helper to create directory unreadable error
    pub fn directory_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryUnreadable { path: path.into(), source }
    }

    /// Helper to create unknown property error
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty(name.into())
    }
}

pub type LocaleResult<T> = Result<T, LocaleError>;
