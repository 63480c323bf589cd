use serde_json::Value;
use thiserror::Error;

/// Failure of a call to one of the backends
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network unreachable, CORS rejection, aborted fetch
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// Success status, but the body does not match the declared type
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Non-success status with a JSON error body
    #[error("API Error: {status} {body}")]
    Api { status: u16, body: Value },

    /// Non-success status with a non-JSON body
    #[error("API Error: {status} {text}")]
    Http { status: u16, text: String },

    /// The analytics backend has too little history to project
    #[error("No hay datos históricos suficientes.")]
    InsufficientHistory,
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::Http { status, .. } => Some(*status),
            ApiError::InsufficientHistory => Some(404),
            _ => None,
        }
    }

    /// `detail` field of a structured error body (FastAPI convention)
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Api { body, .. } => body.get("detail").and_then(Value::as_str),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status() {
        let err = ApiError::Api {
            status: 422,
            body: json!({"detail": "email inválido"}),
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.detail(), Some("email inválido"));
        assert_eq!(ApiError::Transport("offline".into()).status(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http {
            status: 502,
            text: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API Error: 502 Bad Gateway");
    }
}
