// src/api/parser.rs
//! Response parsing: success bodies into typed responses, error bodies into
//! the error hierarchy.

use super::client::ApiResponse;
use super::responses::{NotionError, ObjectResponse, PaginatedResponse, UserResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionClientError, NotionErrorCode};
use crate::model::{Block, CreatedPage, SearchResult, Workspace};
use reqwest::StatusCode;

/// Parse any Notion API response.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        NotionClientError::Deserialization {
            source: e,
            body: preview(body),
        }
        .into()
    })
}

/// Parse error response using notion-client's error object
fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        log::debug!(
            "Notion API error from {}: {} ({})",
            url,
            notion_error.code,
            notion_error.status
        );
        return Err(NotionClientError::from(notion_error).into());
    }

    // Fallback to generic error with HTTP status code
    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
    })
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let cut = (0..=ERROR_BODY_PREVIEW_LENGTH)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// One page of `blocks/{id}/children`.
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    parse_api_response(result)
}

/// A page or database object.
pub fn parse_object_response(result: ApiResponse<String>) -> Result<ObjectResponse, AppError> {
    parse_api_response(result)
}

pub fn parse_search_results(result: ApiResponse<String>) -> Result<Vec<SearchResult>, AppError> {
    let response: PaginatedResponse<ObjectResponse> = parse_api_response(result)?;
    Ok(response
        .results
        .into_iter()
        .map(ObjectResponse::into_search_result)
        .collect())
}

pub fn parse_created_page(result: ApiResponse<String>) -> Result<CreatedPage, AppError> {
    parse_object_response(result).map(ObjectResponse::into_created_page)
}

pub fn parse_user(result: ApiResponse<String>) -> Result<Workspace, AppError> {
    let user: UserResponse = parse_api_response(result)?;
    Ok(user.into_workspace())
}

/// Checks a response whose body is not needed.
pub fn parse_acknowledgement(result: ApiResponse<String>) -> Result<(), AppError> {
    parse_api_response::<serde_json::Value>(result).map(|_| ())
}
