//! Error types for algebra traits.
//!
//! These errors are used by the algebra layer and are intentionally
//! domain-specific rather than generic.

use std::fmt;

/// Error that can occur during content retrieval operations.
///
/// This is the error type for [`NotionContent`](super::NotionContent)
/// operations. It represents failure modes that any content retrieval
/// implementation might encounter.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The requested object was not found (404).
    NotFound { id: String },

    /// Authentication failed: invalid or missing API key.
    Unauthorized { reason: String },

    /// The client lacks permission to access this resource.
    RestrictedResource { reason: String },

    /// The API rate limit was exceeded.
    RateLimited { retry_after_seconds: Option<u64> },

    /// The request was malformed or invalid.
    InvalidRequest { reason: String },

    /// Notion API returned an error.
    ApiError {
        code: String,
        message: String,
        status: u16,
    },

    /// Network or transport error.
    Transport { message: String },

    /// The response could not be parsed.
    MalformedResponse { reason: String },

    /// Some other error occurred.
    Other { message: String },
}

impl FetchError {
    /// Returns `true` if this error means the resource doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "Object not found: {}", id),
            Self::Unauthorized { reason } => write!(f, "Unauthorized: {}", reason),
            Self::RestrictedResource { reason } => write!(f, "Restricted resource: {}", reason),
            Self::RateLimited {
                retry_after_seconds,
            } => {
                write!(f, "Rate limited")?;
                if let Some(seconds) = retry_after_seconds {
                    write!(f, " (retry after {}s)", seconds)?;
                }
                Ok(())
            }
            Self::InvalidRequest { reason } => write!(f, "Invalid request: {}", reason),
            Self::ApiError { code, message, .. } => {
                write!(f, "API error [{}]: {}", code, message)
            }
            Self::Transport { message } => write!(f, "Transport error: {}", message),
            Self::MalformedResponse { reason } => write!(f, "Malformed response: {}", reason),
            Self::Other { message } => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for FetchError {}

// ==============================================================================
// Conversion from existing errors
// ==============================================================================

impl From<crate::error::AppError> for FetchError {
    fn from(err: crate::error::AppError) -> Self {
        use crate::error::{AppError, NotionClientError, NotionErrorCode};

        match err {
            // `ref` bindings keep `err` available for the catch-all sub-arm.
            AppError::NotionService {
                ref code,
                ref message,
                status,
            } => match code {
                NotionErrorCode::ObjectNotFound => Self::NotFound {
                    id: message.clone(),
                },
                NotionErrorCode::Unauthorized => Self::Unauthorized {
                    reason: message.clone(),
                },
                NotionErrorCode::RestrictedResource => Self::RestrictedResource {
                    reason: message.clone(),
                },
                NotionErrorCode::RateLimited => Self::RateLimited {
                    retry_after_seconds: None,
                },
                NotionErrorCode::InvalidJson | NotionErrorCode::ValidationFailed => {
                    Self::InvalidRequest {
                        reason: message.clone(),
                    }
                }
                NotionErrorCode::InternalError
                | NotionErrorCode::ServiceUnavailable
                | NotionErrorCode::HttpStatus(_) => Self::ApiError {
                    code: code.to_string(),
                    message: message.clone(),
                    status: status.as_u16(),
                },
                _ => Self::Other {
                    message: err.to_string(),
                },
            },
            AppError::NotionClient(NotionClientError::NotionApi {
                code,
                message,
                status,
                ..
            }) => match code.as_str() {
                "object_not_found" => Self::NotFound { id: message },
                "unauthorized" => Self::Unauthorized { reason: message },
                "restricted_resource" => Self::RestrictedResource { reason: message },
                "rate_limited" => Self::RateLimited {
                    retry_after_seconds: None,
                },
                "validation_error" | "invalid_json" => Self::InvalidRequest { reason: message },
                _ => Self::ApiError {
                    code,
                    message,
                    status: status as u16,
                },
            },
            AppError::NotConnected { reason } => Self::Unauthorized { reason },
            AppError::NetworkFailure(_) => Self::Transport {
                message: err.to_string(),
            },
            AppError::MalformedResponse(_)
            | AppError::NotionClient(NotionClientError::Deserialization { .. }) => {
                Self::MalformedResponse {
                    reason: err.to_string(),
                }
            }
            _ => Self::Other {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, NotionClientError, NotionErrorCode};

    #[test]
    fn test_fetch_error_is_not_found() {
        assert!(FetchError::NotFound {
            id: "test".to_string()
        }
        .is_not_found());
        assert!(!FetchError::Unauthorized {
            reason: "bad key".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::NotFound {
            id: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "Object not found: abc123");

        let err = FetchError::RateLimited {
            retry_after_seconds: Some(60),
        };
        assert_eq!(err.to_string(), "Rate limited (retry after 60s)");
    }

    #[test]
    fn test_from_notion_api_error() {
        let err: FetchError = AppError::NotionClient(NotionClientError::NotionApi {
            status: 404,
            code: "object_not_found".to_string(),
            message: "Could not find block".to_string(),
            request_id: None,
        })
        .into();
        assert_eq!(
            err,
            FetchError::NotFound {
                id: "Could not find block".to_string()
            }
        );

        let err: FetchError = AppError::NotionClient(NotionClientError::NotionApi {
            status: 502,
            code: "bad_gateway".to_string(),
            message: "upstream".to_string(),
            request_id: None,
        })
        .into();
        assert!(matches!(err, FetchError::ApiError { status: 502, .. }));
    }

    #[test]
    fn test_from_status_fallback() {
        let err: FetchError = AppError::NotionService {
            code: NotionErrorCode::HttpStatus(503),
            message: "HTTP 503".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        }
        .into();
        assert!(matches!(err, FetchError::ApiError { status: 503, .. }));
    }

    #[test]
    fn test_from_not_connected() {
        let err: FetchError = AppError::NotConnected {
            reason: "no key".to_string(),
        }
        .into();
        assert!(matches!(err, FetchError::Unauthorized { .. }));
    }
}
