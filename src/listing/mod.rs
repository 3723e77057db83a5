//! Post listing: the CMS query shared by the initial load and page navigation,
//! plus the shaping of its results.

mod date;
mod rich_text;
mod shape;
mod snapshot;

use shape::shape_page;
pub use snapshot::InitialPage;

use chrono_tz::Tz;

use crate::cms::{CmsClient, Ordering, TypeQuery};
use crate::errors::AppError;
use crate::models::{PostData, PostPage};

/// Document type listed by the blog.
pub const POST_TYPE: &str = "post";

/// Newest publications first.
const ORDER_FIELD: &str = "document.last_publication_date";

/// Only the fields the listing displays.
const POST_FIELDS: [&str; 3] = ["post.postTitle", "post.postDescription", "post.postImage"];

/// Loads pages of shaped posts from the CMS.
#[derive(Debug, Clone)]
pub struct PostListing {
    client: CmsClient,
    page_size: u32,
    timezone: Tz,
}

impl PostListing {
    pub fn new(client: CmsClient, page_size: u32, timezone: Tz) -> Self {
        Self {
            client,
            page_size,
            timezone,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The post query, for `page` or the CMS default (first) page.
    pub fn query(&self, page: Option<u32>) -> TypeQuery {
        TypeQuery {
            page,
            page_size: self.page_size,
            orderings: vec![Ordering::desc(ORDER_FIELD)],
            fetch: POST_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// First page, as rendered when the listing is generated.
    pub async fn load_initial(&self) -> Result<PostPage, AppError> {
        self.fetch(self.query(None)).await
    }

    /// A specific page. Out-of-range pages come back with no posts.
    pub async fn load_page(&self, page: u32) -> Result<PostPage, AppError> {
        self.fetch(self.query(Some(page))).await
    }

    async fn fetch(&self, query: TypeQuery) -> Result<PostPage, AppError> {
        let response = self
            .client
            .get_by_type::<PostData>(POST_TYPE, &query)
            .await?;

        tracing::debug!(
            "CMS returned {} of {} posts (page {} of {}, {} per page)",
            response.results.len(),
            response.total_results_size,
            response.page,
            response.total_pages,
            response.results_per_page
        );

        shape_page(&response, self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_query_shape() {
        let client = CmsClient::new(
            "http://127.0.0.1:9/api/v2/",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/api/v2");

        let listing = PostListing::new(client, 2, Tz::UTC);
        let initial = listing.query(None);
        let paged = listing.query(Some(4));

        assert_eq!(initial.page, None);
        assert_eq!(paged.page, Some(4));
        assert_eq!(initial.orderings, paged.orderings);
        assert_eq!(initial.fetch, paged.fetch);
        assert_eq!(initial.page_size, 2);
        assert_eq!(
            initial.fetch,
            vec!["post.postTitle", "post.postDescription", "post.postImage"]
        );
        assert_eq!(initial.orderings, vec![Ordering::desc(ORDER_FIELD)]);
    }
}
