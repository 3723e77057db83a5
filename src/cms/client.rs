//! HTTP client for the Prismic-style REST API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::TypeQuery;
use crate::errors::AppError;
use crate::models::{ApiInfo, SearchResponse};

/// Thin client over the CMS REST API.
///
/// Every search is pinned to the master ref, which is looked up on each call so
/// freshly published content shows up without restarting the service.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl CmsClient {
    /// Build a client for the API rooted at `endpoint`.
    pub fn new(
        endpoint: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve the ref of the currently published content.
    pub async fn master_ref(&self) -> Result<String, AppError> {
        let request = self.authorize(self.http.get(&self.endpoint));
        let info: ApiInfo = send(request).await?;

        info.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| AppError::upstream("CMS API exposes no master ref"))
    }

    /// Search documents of one type.
    pub async fn get_by_type<T: DeserializeOwned>(
        &self,
        doc_type: &str,
        query: &TypeQuery,
    ) -> Result<SearchResponse<T>, AppError> {
        let master_ref = self.master_ref().await?;

        let mut params = query.to_params(doc_type);
        params.push(("ref", master_ref));

        tracing::debug!(
            doc_type,
            page = ?query.page,
            page_size = query.page_size,
            "Searching CMS documents"
        );

        let url = format!("{}/documents/search", self.endpoint);
        let request = self.authorize(self.http.get(url).query(&params));
        send(request).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.query(&[("access_token", token)]),
            None => request,
        }
    }
}

/// Send a request and decode a JSON body, treating non-2xx answers as upstream errors.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        tracing::warn!("CMS responded with {}", status);
        return Err(AppError::Upstream {
            message: format!("CMS responded with {}", status),
            status: Some(status.as_u16()),
        });
    }

    Ok(response.json::<T>().await?)
}
