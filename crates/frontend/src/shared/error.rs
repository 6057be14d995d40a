//! Failures of calls against the orders backend

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Login rejected or answered without a token
    #[error("Usuario o contraseña incorrectos")]
    Auth,
    /// HTTP 401 on an authenticated call
    #[error("La sesión ha expirado")]
    SessionExpired,
    #[error("Recurso no encontrado")]
    NotFound,
    /// The request never produced an HTTP response
    #[error("Error de red: {0}")]
    Network(String),
    #[error("Error del servidor ({status})")]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Respuesta inválida: {0}")]
    Decode(String),
    #[error("No se pudo serializar la petición: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Message extracted from the response body, if the endpoint provides one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expiry_is_distinct() {
        assert!(ApiError::SessionExpired.is_session_expired());
        assert!(!ApiError::Network("offline".into()).is_session_expired());
        assert!(!ApiError::NotFound.is_session_expired());
    }

    #[test]
    fn test_server_message_only_for_http_errors() {
        let err = ApiError::Http {
            status: 422,
            message: Some("valor requerido".into()),
        };
        assert_eq!(err.server_message(), Some("valor requerido"));
        assert_eq!(ApiError::Auth.server_message(), None);
    }
}
