//! Shaping: CMS documents into post view records.

use chrono_tz::Tz;

use super::date::format_publication_date;
use super::rich_text::{as_text, first_paragraph};
use crate::errors::AppError;
use crate::models::{Document, Post, PostData, PostPage, SearchResponse};

/// Convert one `post` document into its view record.
pub fn shape_post(doc: &Document<PostData>, tz: Tz) -> Result<Post, AppError> {
    let published = doc.last_publication_date.as_deref().ok_or_else(|| {
        AppError::upstream(format!("Document {} has no publication date", doc.id))
    })?;

    Ok(Post {
        slug: doc.uid.clone(),
        title: as_text(&doc.data.post_title, " "),
        description: first_paragraph(&doc.data.post_description).to_string(),
        banner: doc.data.post_image.url.clone().unwrap_or_default(),
        updated_at: format_publication_date(published, tz)?,
    })
}

/// Shape a whole search page, keeping the CMS pagination metadata.
pub fn shape_page(response: &SearchResponse<PostData>, tz: Tz) -> Result<PostPage, AppError> {
    let posts = response
        .results
        .iter()
        .map(|doc| shape_post(doc, tz))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostPage {
        posts,
        page: response.page,
        total_pages: response.total_pages,
    })
}
