//! Initial-page snapshot with time-based revalidation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use super::PostListing;
use crate::errors::AppError;
use crate::models::PostPage;

struct Cached {
    page: PostPage,
    fetched_at: Instant,
}

/// The initial loader's result, reused until it is older than `revalidate_after`.
///
/// A failed refresh keeps serving the previous snapshot. Without one, the
/// failure is returned to the caller.
pub struct InitialPage {
    listing: Arc<PostListing>,
    revalidate_after: Duration,
    cached: RwLock<Option<Cached>>,
}

impl InitialPage {
    pub fn new(listing: Arc<PostListing>, revalidate_after: Duration) -> Self {
        Self {
            listing,
            revalidate_after,
            cached: RwLock::new(None),
        }
    }

    /// Current snapshot, refreshed first when stale or missing.
    pub async fn get(&self) -> Result<PostPage, AppError> {
        {
            let cached = self.cached.read().await;
            if let Some(c) = cached.as_ref() {
                if c.fetched_at.elapsed() < self.revalidate_after {
                    return Ok(c.page.clone());
                }
            }
        }

        match self.refresh().await {
            Ok(page) => Ok(page),
            Err(e) => {
                let cached = self.cached.read().await;
                match cached.as_ref() {
                    Some(c) => {
                        tracing::warn!("Revalidation failed, serving stale listing: {}", e);
                        Ok(c.page.clone())
                    }
                    None => Err(e),
                }
            }
        }
    }

    /// Reload the first page from the CMS and replace the snapshot.
    pub async fn refresh(&self) -> Result<PostPage, AppError> {
        let page = self.listing.load_initial().await?;

        *self.cached.write().await = Some(Cached {
            page: page.clone(),
            fetched_at: Instant::now(),
        });

        tracing::info!(
            "Listing revalidated: {} posts, {} pages",
            page.posts.len(),
            page.total_pages
        );

        Ok(page)
    }
}
