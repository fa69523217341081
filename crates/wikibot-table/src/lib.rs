//! WikiBot Table
//!
//! Codec for the wiki pipe table syntax: parse existing tables out of
//! article markup and render cell matrices back into markup. Pure text
//! transform, no I/O.

mod error;
mod table;

pub use error::TableError;
pub use table::Table;

pub type Result<T> = std::result::Result<T, TableError>;
