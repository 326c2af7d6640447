use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// Locale resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when neither cookie nor header resolve to a supported one (default: en-US)
    #[serde(rename = "default")]
    pub default_locale: String,
    /// Locale directory, relative to `base_dir` even when written with a leading '/' (default: /i18n/)
    pub directory: String,
    /// Anchor for `directory` (default: process working directory)
    pub base_dir: Option<PathBuf>,
}

impl LocaleConfig {
    /// Absolute path whose subdirectories are the supported locales
    pub fn directory_root(&self) -> PathBuf {
        let base = self
            .base_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let relative = self.directory.trim_matches('/');
        if relative.is_empty() { base } else { base.join(relative) }
    }
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file (explicit path first, then the usual locations)
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(explicit_path: Option<&str>) -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let config_path = match explicit_path {
            Some(path) => Some(path.to_string()),
            None => Self::find_config_file(),
        };

        let mut config = if let Some(config_path) = config_path {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,request_locale=debug")
    /// - APP_LOCALE_DEFAULT: Default locale (default: en-US)
    /// - APP_LOCALE_DIRECTORY: Locale directory (default: /i18n/)
    /// - APP_LOCALE_BASE_DIR: Anchor for the locale directory (default: working directory)
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(default_locale) = std::env::var("APP_LOCALE_DEFAULT") {
            self.locale.default_locale = default_locale;
            tracing::info!("Override locale.default from env: {}", self.locale.default_locale);
        }

        if let Ok(directory) = std::env::var("APP_LOCALE_DIRECTORY") {
            self.locale.directory = directory;
            tracing::info!("Override locale.directory from env: {}", self.locale.directory);
        }

        if let Ok(base_dir) = std::env::var("APP_LOCALE_BASE_DIR") {
            tracing::info!("Override locale.base_dir from env: {}", base_dir);
            self.locale.base_dir = Some(PathBuf::from(base_dir));
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        // Validate server port
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        // Validate locale settings
        if self.locale.default_locale.trim().is_empty() {
            anyhow::bail!("locale.default cannot be empty");
        }

        let root = self.locale.directory_root();
        if !root.is_dir() {
            anyhow::bail!("Locale directory {} does not exist or is not a directory", root.display());
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,request_locale=debug".to_string(), file: None }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self { default_locale: "en-US".to_string(), directory: "/i18n/".to_string(), base_dir: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.locale.default_locale, "en-US");
        assert_eq!(config.locale.directory, "/i18n/");
        assert!(config.locale.base_dir.is_none());
    }

    #[test]
    fn test_directory_root_is_relative_to_base_dir() {
        let locale = LocaleConfig {
            base_dir: Some(PathBuf::from("/srv/app")),
            ..LocaleConfig::default()
        };
        assert_eq!(locale.directory_root(), PathBuf::from("/srv/app/i18n"));

        let nested = LocaleConfig { directory: "assets/locales/".into(), ..locale.clone() };
        assert_eq!(nested.directory_root(), PathBuf::from("/srv/app/assets/locales"));

        let bare = LocaleConfig { directory: "/".into(), ..locale };
        assert_eq!(bare.directory_root(), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_from_toml_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[server]
port = 9090

[locale]
default = "fr-FR"
directory = "/locales/"
"#,
        )
        .unwrap();

        let config = Config::from_toml(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.locale.default_locale, "fr-FR");
        assert_eq!(config.locale.directory, "/locales/");
        assert_eq!(config.logging.level, "info,request_locale=debug");
    }

    #[test]
    fn test_validate_accepts_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();

        let mut config = Config::default();
        config.locale.base_dir = Some(dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::default();
        config.locale.base_dir = Some(dir.path().to_path_buf());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_rejects_empty_default_and_zero_port() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();

        let mut config = Config::default();
        config.locale.base_dir = Some(dir.path().to_path_buf());
        config.locale.default_locale = "  ".into();
        assert!(config.validate().is_err());

        config.locale.default_locale = "en-US".into();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
