//! Data models for the Explorer blog.
//!
//! `document` mirrors the CMS wire format; `post` holds the view records built from it.

mod document;
mod post;

pub use document::*;
pub use post::*;
