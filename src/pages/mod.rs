//! Server-rendered listing page.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::errors::AppError;
use crate::models::Post;
use crate::navigator::{NavIntent, NavRequest, NavTarget, Navigator, PostsView};
use crate::AppState;

/// Listing entry as rendered.
struct Entry {
    href: String,
    title: String,
    banner: String,
    updated_at: String,
    description: String,
}

impl From<&Post> for Entry {
    fn from(post: &Post) -> Self {
        Self {
            href: post.href(),
            title: post.title.clone(),
            banner: post.banner.clone(),
            updated_at: post.updated_at.clone(),
            description: post.description.clone(),
        }
    }
}

/// Pagination bar control.
struct NavLink {
    href: String,
    symbol: &'static str,
    aria_label: &'static str,
}

impl From<NavTarget> for NavLink {
    fn from(target: NavTarget) -> Self {
        let (symbol, aria_label) = match target.intent {
            NavIntent::First => ("«", "Primeira página"),
            NavIntent::Previous => ("‹", "Página anterior"),
            NavIntent::Next => ("›", "Próxima página"),
            NavIntent::Last => ("»", "Última página"),
        };

        Self {
            href: format!("/posts?page={}", target.page),
            symbol,
            aria_label,
        }
    }
}

#[derive(Template)]
#[template(path = "posts.html")]
struct PostsTemplate {
    entries: Vec<Entry>,
    back_links: Vec<NavLink>,
    forward_links: Vec<NavLink>,
    current_page: u32,
    total_pages: u32,
}

impl PostsTemplate {
    fn new(view: &PostsView) -> Self {
        let (back, forward): (Vec<NavTarget>, Vec<NavTarget>) = view
            .targets()
            .into_iter()
            .partition(|target| target.intent.is_backward());

        Self {
            entries: view.posts().iter().map(Entry::from).collect(),
            back_links: back.into_iter().map(NavLink::from).collect(),
            forward_links: forward.into_iter().map(NavLink::from).collect(),
            current_page: view.current_page(),
            total_pages: view.total_pages(),
        }
    }
}

/// GET /posts - Render the listing, optionally navigated with `page` and `go`.
///
/// A failing initial load fails the page. A failing navigation keeps the
/// previous view on screen.
pub async fn posts_page(
    State(state): State<AppState>,
    Query(request): Query<NavRequest>,
) -> Result<Html<String>, AppError> {
    let initial = state.initial.get().await?;

    let mut navigator = Navigator::new(state.listing.clone(), PostsView::new(initial));
    if let Err(e) = navigator.follow(&request).await {
        if let AppError::BadRequest(_) = e {
            return Err(e);
        }
        tracing::warn!(
            "Navigation failed, keeping page {}: {}",
            navigator.view().current_page(),
            e
        );
    }

    let html = PostsTemplate::new(navigator.view()).render()?;
    Ok(Html(html))
}
