pub mod cookies;
pub mod error;
pub mod negotiation;

pub use cookies::{CookieExtractor, extract_cookie, set_cookie_header};
pub use error::{LocaleError, LocaleResult};
pub use negotiation::best_match;
