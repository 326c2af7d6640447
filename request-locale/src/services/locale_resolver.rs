//! Per-request locale resolution
//!
//! Combines the `accept-language` cookie, the `Accept-Language` header and
//! the configured default into one [`RequestLocale`], checked against the
//! locale directories currently on disk.

use crate::config::LocaleConfig;
use crate::models::RequestLocale;
use crate::services::{LocaleDirectory, LocaleSettings};
use crate::utils::{CookieExtractor, LocaleResult, best_match};

/// Name of the cookie that persists a resolved locale
pub const LOCALE_COOKIE: &str = "accept-language";

/// Outcome of resolving one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: RequestLocale,
    /// Value the response's locale cookie must be set to, if it needs (re)writing
    pub set_cookie: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    settings: LocaleSettings,
    cookie: CookieExtractor,
}

impl LocaleResolver {
    pub fn new(settings: LocaleSettings) -> LocaleResult<Self> {
        Ok(Self { settings, cookie: CookieExtractor::new(LOCALE_COOKIE)? })
    }

    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Resolve the locale for one request from its raw header values.
    ///
    /// The cookie is only trusted when it equals the header byte for byte:
    /// it confirms an earlier negotiation, it never overrides a header that
    /// has since changed. Empty values count as absent.
    ///
    /// Fails only if the locale root cannot be listed.
    pub fn resolve(
        &self,
        accept_language: Option<&str>,
        cookie_header: Option<&str>,
    ) -> LocaleResult<Resolution> {
        let config = self.settings.snapshot();

        let header_value = accept_language.filter(|value| !value.is_empty());
        let cookie_value = cookie_header
            .and_then(|raw| self.cookie.extract(raw))
            .filter(|value| !value.is_empty());

        let candidate = match (cookie_value.as_deref(), header_value) {
            (Some(cookie), Some(header)) if cookie == header => cookie,
            (_, Some(header)) => header,
            _ => config.default_locale.as_str(),
        };

        let directory = LocaleDirectory::new(config.directory_root());
        let supported = directory.list()?;
        let negotiated = best_match(candidate, &supported, &config.default_locale);

        tracing::debug!(
            "Locale candidate '{}' negotiated to '{}' (header={:?}, cookie={:?}, supported={})",
            candidate,
            negotiated,
            header_value,
            cookie_value,
            supported.len()
        );

        let (lang, set_cookie) = if negotiated != config.default_locale
            && cookie_value.as_deref() != Some(negotiated.as_str())
        {
            let validated = Self::validate(&config, &directory, negotiated);
            (Some(validated.clone()), Some(validated))
        } else if cookie_value.is_some() {
            // A differing stale cookie is left as is when negotiation lands on the default
            (Some(negotiated), None)
        } else {
            (None, None)
        };

        Ok(Resolution {
            locale: RequestLocale {
                default: config.default_locale,
                directory: config.directory,
                lang,
            },
            set_cookie,
        })
    }

    /// Decision used when resolution itself could not run.
    pub fn fallback(&self) -> RequestLocale {
        let config = self.settings.snapshot();
        RequestLocale { default: config.default_locale, directory: config.directory, lang: None }
    }

    /// Confirm `locale` has a directory, otherwise substitute the default.
    fn validate(config: &LocaleConfig, directory: &LocaleDirectory, locale: String) -> String {
        if directory.contains(&locale) {
            locale
        } else {
            tracing::warn!(
                "Locale directory for '{}' not readable under {}, using default '{}'",
                locale,
                directory.root().display(),
                config.default_locale
            );
            config.default_locale.clone()
        }
    }
}
