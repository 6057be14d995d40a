//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL, the per-endpoint error extraction policy and
//! the single place where HTTP statuses become [`ApiError`] values.

use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Port the orders backend listens on when no base URL is configured
const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Uses the configured base URL when present, otherwise derives it from the
/// current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// How an endpoint reports failure details in its response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorExtraction {
    /// Only the status code is meaningful
    StatusOnly,
    /// The JSON body carries a `message` field
    NestedMessage,
}

/// Map a non-2xx response to an [`ApiError`].
///
/// 401 always wins over any body content.
pub fn classify_failure(status: u16, body: &str, extraction: ErrorExtraction) -> ApiError {
    match status {
        401 => ApiError::SessionExpired,
        404 => ApiError::NotFound,
        _ => ApiError::Http {
            status,
            message: match extraction {
                ErrorExtraction::StatusOnly => None,
                ErrorExtraction::NestedMessage => extract_message(body),
            },
        },
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
}

/// Decode a successful response or classify a failed one
pub async fn read_json<T>(response: Response, extraction: ErrorExtraction) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(classify_failure(status, &body, extraction));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_session_expiry_regardless_of_body() {
        let body = r#"{"message": "token vencido"}"#;
        assert_eq!(
            classify_failure(401, body, ErrorExtraction::NestedMessage),
            ApiError::SessionExpired
        );
        assert_eq!(
            classify_failure(401, "", ErrorExtraction::StatusOnly),
            ApiError::SessionExpired
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            classify_failure(404, "", ErrorExtraction::StatusOnly),
            ApiError::NotFound
        );
    }

    #[test]
    fn test_nested_message_is_extracted_only_when_requested() {
        let body = r#"{"message": "El valor es obligatorio"}"#;
        assert_eq!(
            classify_failure(422, body, ErrorExtraction::NestedMessage),
            ApiError::Http {
                status: 422,
                message: Some("El valor es obligatorio".into())
            }
        );
        assert_eq!(
            classify_failure(422, body, ErrorExtraction::StatusOnly),
            ApiError::Http {
                status: 422,
                message: None
            }
        );
    }

    #[test]
    fn test_unparseable_body_yields_no_message() {
        assert_eq!(
            classify_failure(500, "<html>", ErrorExtraction::NestedMessage),
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(
            classify_failure(500, r#"{"message": "  "}"#, ErrorExtraction::NestedMessage),
            ApiError::Http {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_configured_base_url_wins() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".into(),
        };
        assert_eq!(api_base(&config), "http://localhost:8000");
    }
}
