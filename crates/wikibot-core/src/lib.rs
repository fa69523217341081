//! WikiBot Core
//!
//! Conflict-safe manipulation of wiki pages through the HTML edit
//! interface. A `Wiki` holds the cookie-carrying transport for one
//! endpoint; `Page` runs the edit-session protocol on top of it:
//! fetch the edit form, hold the server's token and timestamp, and
//! resubmit with bounded retries when a concurrent edit is detected.

mod config;
mod error;
mod page;
mod wiki;

pub use config::{Dotfile, Profile};
pub use error::WikiError;
pub use page::{Page, PageKind};
pub use wiki::Wiki;

// Re-export the library services bot scripts compose with
pub use wikibot_browser::{Browser, BrowserError};
pub use wikibot_query::PageContent;
pub use wikibot_table::{Table, TableError};

pub type Result<T> = std::result::Result<T, WikiError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
