//! Transport error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("too many redirects")]
    TooManyRedirects,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(reqwest::StatusCode),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
