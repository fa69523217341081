//! Table codec error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A continuation line appeared before any cell was opened in the
    /// current row, so there is nothing to append it to.
    #[error("continuation line without a preceding cell: {0:?}")]
    OrphanContinuation(String),
}
