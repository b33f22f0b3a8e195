// src/api/client.rs
//! Pure HTTP client wrapper for Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to the Notion API. It handles authentication and
//! basic request/response operations; parsing lives in `parser`.

use super::parser;
use super::requests::{AppendChildrenRequest, CreatePageRequest, SearchQuery};
use super::simple_pagination::fetch_all_pages_simple;
use crate::algebras::{FetchError, NotionContent};
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_VERSION, NOTION_CHILDREN_PER_REQUEST};
use crate::error::AppError;
use crate::model::{Block, CreatedPage, PageContent, SearchResult, Workspace};
use crate::types::{ApiKey, BlockId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, NOTION_API_BASE_URL)
    }

    /// Creates a client talking to another API root, such as a local proxy.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Makes a GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL), query included
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

/// Query string for one page of a children listing.
fn children_endpoint(block_id: &BlockId, page_size: u32, cursor: Option<&str>) -> String {
    let mut endpoint = format!(
        "blocks/{}/children?page_size={}",
        block_id.to_dashed(),
        page_size
    );
    if let Some(cursor) = cursor {
        endpoint.push_str("&start_cursor=");
        endpoint.push_str(&url::form_urlencoded::byte_serialize(cursor.as_bytes()).collect::<String>());
    }
    endpoint
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page_content(&self, id: &PageId) -> Result<PageContent, AppError> {
        let endpoint = format!("pages/{}", id.to_dashed());
        let response = self.get(&endpoint).await?;
        let page = parser::parse_object_response(extract_response_text(response).await?)?;

        let block_id = BlockId::from_raw(id.as_str());
        let results = super::NotionRepository::retrieve_children(self, &block_id).await?;
        log::info!(
            "Fetched page '{}' with {} top-level blocks",
            page.title(),
            results.len()
        );
        Ok(PageContent {
            title: page.title(),
            results,
        })
    }

    async fn retrieve_children(&self, block_id: &BlockId) -> Result<Vec<Block>, AppError> {
        let pagination_result = fetch_all_pages_simple(
            |page_size, cursor| {
                let endpoint = children_endpoint(block_id, page_size, cursor.as_deref());
                async move {
                    let response = self.get(&endpoint).await?;
                    let result = extract_response_text(response).await?;
                    parser::parse_blocks_pagination(result)
                }
            },
        )
        .await?;
        Ok(pagination_result.items)
    }

    async fn create_page(&self, request: CreatePageRequest) -> Result<CreatedPage, AppError> {
        let CreatePageRequest {
            parent,
            properties,
            mut children,
        } = request;
        let overflow = if children.len() > NOTION_CHILDREN_PER_REQUEST {
            children.split_off(NOTION_CHILDREN_PER_REQUEST)
        } else {
            Vec::new()
        };

        let first = CreatePageRequest {
            parent,
            properties,
            children,
        };
        let response = self.post("pages", &first).await?;
        let created = parser::parse_created_page(extract_response_text(response).await?)?;
        log::info!("Created page {}", created.id);

        if !overflow.is_empty() {
            let endpoint = format!("blocks/{}/children", created.as_block_id().to_dashed());
            for batch in overflow.chunks(NOTION_CHILDREN_PER_REQUEST) {
                log::debug!("Appending {} more blocks to {}", batch.len(), created.id);
                let body = AppendChildrenRequest { children: batch };
                let response = self.patch(&endpoint, &body).await?;
                parser::parse_acknowledgement(extract_response_text(response).await?)?;
            }
        }
        Ok(created)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError> {
        let response = self.post("search", &query.to_body()).await?;
        let results = parser::parse_search_results(extract_response_text(response).await?)?;
        log::debug!("Search '{}' returned {} results", query.query, results.len());
        Ok(results)
    }

    async fn current_user(&self) -> Result<Workspace, AppError> {
        let response = self.get("users/me").await?;
        parser::parse_user(extract_response_text(response).await?)
    }
}

#[async_trait::async_trait]
impl NotionContent for NotionHttpClient {
    async fn retrieve_children(&self, block_id: &BlockId) -> Result<Vec<Block>, FetchError> {
        super::NotionRepository::retrieve_children(self, block_id)
            .await
            .map_err(FetchError::from)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
