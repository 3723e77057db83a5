//! Page navigation over the post listing.
//!
//! A [`PostsView`] is the displayed state: the post list and the page it came
//! from, always replaced together. A [`Navigator`] drives one view through the
//! CMS and ignores pages that come back empty.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::listing::PostListing;
use crate::models::{Post, PostPage};

/// Navigation controls of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIntent {
    First,
    Previous,
    Next,
    Last,
}

impl NavIntent {
    pub const ALL: [NavIntent; 4] = [
        NavIntent::First,
        NavIntent::Previous,
        NavIntent::Next,
        NavIntent::Last,
    ];

    /// Whether the control sits before the page indicator.
    pub fn is_backward(self) -> bool {
        matches!(self, NavIntent::First | NavIntent::Previous)
    }
}

/// A navigation control that is currently offered, with the page it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavTarget {
    pub intent: NavIntent,
    pub page: u32,
}

/// Displayed pagination state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsView {
    posts: Vec<Post>,
    current_page: u32,
    total_pages: u32,
}

impl PostsView {
    pub fn new(initial: PostPage) -> Self {
        Self {
            posts: initial.posts,
            current_page: initial.page,
            total_pages: initial.total_pages,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page an intent leads to, or `None` when the control is not offered.
    pub fn target(&self, intent: NavIntent) -> Option<u32> {
        match intent {
            NavIntent::First if self.current_page > 1 => Some(1),
            NavIntent::Previous if self.current_page > 1 => Some(self.current_page - 1),
            NavIntent::Next if self.current_page < self.total_pages => Some(self.current_page + 1),
            NavIntent::Last if self.current_page < self.total_pages => Some(self.total_pages),
            _ => None,
        }
    }

    /// Controls offered from the current page, in bar order.
    pub fn targets(&self) -> Vec<NavTarget> {
        NavIntent::ALL
            .iter()
            .filter_map(|&intent| self.target(intent).map(|page| NavTarget { intent, page }))
            .collect()
    }

    /// Show `loaded` as page `page`. Empty results leave the view untouched.
    pub fn apply(&mut self, page: u32, loaded: PostPage) -> bool {
        if loaded.posts.is_empty() {
            return false;
        }

        self.posts = loaded.posts;
        self.current_page = page;
        self.total_pages = loaded.total_pages;
        true
    }
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Updated,
    Unchanged,
}

/// Navigation request as carried by the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavRequest {
    /// Page to show.
    pub page: Option<u32>,
    /// Control to follow after `page` has been applied.
    pub go: Option<NavIntent>,
}

/// Drives a [`PostsView`] through the CMS.
///
/// Navigation borrows the navigator mutably, so navigations on one view run
/// one after another and never overwrite each other out of order.
pub struct Navigator {
    listing: Arc<PostListing>,
    view: PostsView,
}

impl Navigator {
    pub fn new(listing: Arc<PostListing>, view: PostsView) -> Self {
        Self { listing, view }
    }

    pub fn view(&self) -> &PostsView {
        &self.view
    }

    pub fn into_view(self) -> PostsView {
        self.view
    }

    /// Fetch `page` and show it, unless it has no posts.
    pub async fn navigate(&mut self, page: u32) -> Result<NavOutcome, AppError> {
        if page == 0 {
            return Err(AppError::BadRequest("Page numbers start at 1".to_string()));
        }

        let loaded = self.listing.load_page(page).await?;

        if self.view.apply(page, loaded) {
            Ok(NavOutcome::Updated)
        } else {
            tracing::debug!(
                "Page {} has no posts, keeping page {}",
                page,
                self.view.current_page
            );
            Ok(NavOutcome::Unchanged)
        }
    }

    /// Follow a pagination control. Controls that are not offered do nothing.
    pub async fn go(&mut self, intent: NavIntent) -> Result<NavOutcome, AppError> {
        match self.view.target(intent) {
            Some(page) => self.navigate(page).await,
            None => Ok(NavOutcome::Unchanged),
        }
    }

    /// Apply a query-string request: `page` first, then `go`.
    pub async fn follow(&mut self, request: &NavRequest) -> Result<NavOutcome, AppError> {
        let mut outcome = NavOutcome::Unchanged;

        if let Some(page) = request.page {
            if page != self.view.current_page {
                outcome = self.navigate(page).await?;
            }
        }

        if let Some(intent) = request.go {
            if self.go(intent).await? == NavOutcome::Updated {
                outcome = NavOutcome::Updated;
            }
        }

        Ok(outcome)
    }
}
