//! On-demand revalidation endpoint.

use axum::extract::State;
use serde::Serialize;

use super::{ApiResponse, ApiResult};
use crate::AppState;

/// Summary of the refreshed snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevalidateResponse {
    pub revalidated: bool,
    pub post_count: usize,
    pub total_pages: u32,
}

/// POST /api/revalidate - Reload the initial listing page from the CMS.
pub async fn revalidate(State(state): State<AppState>) -> ApiResult<RevalidateResponse> {
    let page = state.initial.refresh().await?;

    Ok(ApiResponse::new(RevalidateResponse {
        revalidated: true,
        post_count: page.posts.len(),
        total_pages: page.total_pages,
    }))
}
