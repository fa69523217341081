//! WikiBot Browser
//!
//! A minimal cookie-aware HTTP transport for driving a wiki's HTML edit
//! interface. One `Browser` per wiki endpoint; every request carries the
//! shared cookie jar and optional basic-auth credentials.

mod browser;
mod error;

pub use browser::Browser;
pub use error::BrowserError;

pub type Result<T> = std::result::Result<T, BrowserError>;
