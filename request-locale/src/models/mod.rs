pub mod locale;

pub use locale::{LocaleProperty, RequestLocale};
