//! WikiBot Query
//!
//! Read-only extraction of the handful of named fields the edit-session
//! protocol needs from wiki HTML: the edit form with its token and
//! timestamp, read-only content views, anchor lists, and the rendered
//! content region of special pages. Not a general HTML toolkit.

mod document;

pub use document::{
    attribute, content_region, extract_page, has_login_error, link_texts, link_titles, PageContent,
};
