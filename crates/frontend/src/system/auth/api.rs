use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::error::ApiError;

/// Exchange credentials for a bearer token.
///
/// Any non-2xx answer, or a 2xx answer without `access_token`, is an
/// [`ApiError::Auth`]. Never retried.
pub async fn login(base_url: &str, username: &str, password: &str) -> Result<String, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let body = request.to_form_body(|s| urlencoding::encode(s).into_owned());

    let response = Request::post(&format!("{}/usuarios/login", base_url))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("Login rejected with status {}", response.status());
        return Err(ApiError::Auth);
    }

    let data = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    token_from_response(data)
}

fn token_from_response(data: LoginResponse) -> Result<String, ApiError> {
    match data.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            log::error!("Login response carried no access token");
            Err(ApiError::Auth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_token_is_auth_error() {
        assert_eq!(
            token_from_response(LoginResponse { access_token: None }),
            Err(ApiError::Auth)
        );
        assert_eq!(
            token_from_response(LoginResponse {
                access_token: Some(String::new())
            }),
            Err(ApiError::Auth)
        );
        assert_eq!(
            token_from_response(LoginResponse {
                access_token: Some("abc".into())
            }),
            Ok("abc".to_string())
        );
    }
}
