//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("transport error: {0}")]
    Browser(#[from] wikibot_browser::BrowserError),

    #[error("no edit form found while parsing the response")]
    NoEditFormFound,

    #[error("this page is read-only")]
    ReadOnlyViolation,

    #[error("unable to authenticate as {0}")]
    AuthenticationFailed(String),

    #[error("re-submit limit reached")]
    ResubmitLimitExceeded,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
