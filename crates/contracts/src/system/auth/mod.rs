use serde::{Deserialize, Serialize};

/// Form body of `POST /usuarios/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// `application/x-www-form-urlencoded` encoding of the credentials
    pub fn to_form_body(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "username={}&password={}",
            encode(&self.username),
            encode(&self.password)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Bearer token plus the name shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_uses_supplied_encoder() {
        let request = LoginRequest {
            username: "ana maria".into(),
            password: "a&b".into(),
        };
        let body = request.to_form_body(|s| s.replace(' ', "+").replace('&', "%26"));
        assert_eq!(body, "username=ana+maria&password=a%26b");
    }

    #[test]
    fn test_missing_token_decodes_as_none() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(response.access_token.is_none());
    }

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(Session::new("abc", "ana").bearer(), "Bearer abc");
    }
}
