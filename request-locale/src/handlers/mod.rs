pub mod locale;

pub use locale::{get_locale, health};
