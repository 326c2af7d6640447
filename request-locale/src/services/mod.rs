pub mod locale_directory;
pub mod locale_resolver;
pub mod locale_settings;

pub use locale_directory::LocaleDirectory;
pub use locale_resolver::{LOCALE_COOKIE, LocaleResolver, Resolution};
pub use locale_settings::LocaleSettings;
