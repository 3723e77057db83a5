//! Headless CMS access.

mod client;
mod query;

pub use client::*;
pub use query::*;
