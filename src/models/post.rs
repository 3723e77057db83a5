//! Post view records produced by shaping CMS documents.

use serde::Serialize;

/// A post as displayed in the listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub banner: String,
    pub updated_at: String,
}

impl Post {
    /// Link to the detail view of this post.
    pub fn href(&self) -> String {
        match &self.slug {
            Some(slug) => format!("/posts/{}", slug),
            None => "/posts".to_string(),
        }
    }
}

/// One page of shaped posts with the pagination metadata reported by the CMS.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u32,
    pub total_pages: u32,
}
