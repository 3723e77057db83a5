//! Post listing API endpoint.

use axum::extract::{Query, State};
use serde::Serialize;

use super::{ApiResponse, ApiResult};
use crate::navigator::{NavRequest, NavTarget, Navigator, PostsView};
use crate::AppState;

/// Listing page with the controls offered from it.
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    #[serde(flatten)]
    pub view: PostsView,
    pub navigation: Vec<NavTarget>,
}

/// GET /api/posts - Listing page, optionally navigated with `page` and `go`.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(request): Query<NavRequest>,
) -> ApiResult<PostsResponse> {
    let initial = state.initial.get().await?;

    let mut navigator = Navigator::new(state.listing.clone(), PostsView::new(initial));
    navigator.follow(&request).await?;

    let view = navigator.into_view();
    let navigation = view.targets();

    Ok(ApiResponse::new(PostsResponse { view, navigation }))
}
