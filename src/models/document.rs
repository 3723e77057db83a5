//! CMS wire model: the shapes returned by the Prismic-style REST API.

use serde::Deserialize;

/// API root document, used to discover the master ref.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub refs: Vec<ContentRef>,
}

/// A content version exposed by the API root.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub is_master_ref: bool,
}

/// One page of a document search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    pub page: u32,
    #[serde(default)]
    pub results_per_page: u32,
    #[serde(default)]
    pub total_results_size: u32,
    pub total_pages: u32,
    pub results: Vec<Document<T>>,
}

/// A CMS document with its type-specific payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Raw timestamp as sent by the CMS, e.g. `2021-07-14T18:18:29+0000`
    #[serde(default)]
    pub last_publication_date: Option<String>,
    pub data: T,
}

/// A single rich-text block (paragraph, heading, image, ...).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
impl RichTextBlock {
    pub fn new(kind: &str, text: &str) -> Self {
        Self {
            kind: kind.to_string(),
            text: Some(text.to_string()),
        }
    }
}

/// Image field. Empty image fields come back as `{}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ImageField {
    #[serde(default)]
    pub url: Option<String>,
}

/// Fields of a `post` document requested by the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostData {
    #[serde(rename = "postTitle", default)]
    pub post_title: Vec<RichTextBlock>,
    #[serde(rename = "postDescription", default)]
    pub post_description: Vec<RichTextBlock>,
    #[serde(rename = "postImage", default)]
    pub post_image: ImageField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let raw = r#"{
            "page": 1,
            "results_per_page": 2,
            "results_size": 1,
            "total_results_size": 3,
            "total_pages": 2,
            "next_page": "https://explorer.cdn.prismic.io/api/v2/documents/search?page=2",
            "prev_page": null,
            "results": [{
                "id": "YOx1",
                "uid": "hello-world",
                "type": "post",
                "href": "https://explorer.cdn.prismic.io/api/v2/documents/search?ref=abc",
                "last_publication_date": "2021-07-14T18:18:29+0000",
                "data": {
                    "postTitle": [{"type": "heading1", "text": "Hello", "spans": []}],
                    "postDescription": [{"type": "image", "url": "https://images.prismic.io/a.png"}],
                    "postImage": {"url": "https://images.prismic.io/b.png", "alt": null, "dimensions": {"width": 720, "height": 410}}
                }
            }]
        }"#;

        let response: SearchResponse<PostData> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.total_pages, 2);
        assert_eq!(response.total_results_size, 3);

        let doc = &response.results[0];
        assert_eq!(doc.uid.as_deref(), Some("hello-world"));
        assert_eq!(doc.doc_type, "post");
        assert_eq!(doc.data.post_title, vec![RichTextBlock::new("heading1", "Hello")]);
        assert_eq!(doc.data.post_description[0].text, None);
        assert_eq!(
            doc.data.post_image.url.as_deref(),
            Some("https://images.prismic.io/b.png")
        );
    }

    #[test]
    fn test_deserialize_empty_image_and_missing_uid() {
        let raw = r#"{"id": "x", "uid": null, "type": "post", "data": {"postImage": {}}}"#;
        let doc: Document<PostData> = serde_json::from_str(raw).unwrap();
        assert!(doc.uid.is_none());
        assert!(doc.last_publication_date.is_none());
        assert_eq!(doc.data.post_image, ImageField::default());
        assert!(doc.data.post_title.is_empty());
    }

    #[test]
    fn test_deserialize_api_info() {
        let raw = r#"{"refs": [
            {"id": "preview", "ref": "Xp1", "label": "Preview", "isMasterRef": false},
            {"id": "master", "ref": "Ym2", "label": "Master", "isMasterRef": true}
        ], "types": {"post": "Post"}}"#;
        let info: ApiInfo = serde_json::from_str(raw).unwrap();
        let master = info.refs.iter().find(|r| r.is_master_ref).unwrap();
        assert_eq!(master.reference, "Ym2");
    }
}
