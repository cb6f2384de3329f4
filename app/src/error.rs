//! Error types for the reservation dashboard
//!
//! Server error payloads arrive in more than one shape. They are normalized
//! exactly once, at the client boundary, so the rest of the app only ever
//! inspects [`ApiError`].

use serde::Deserialize;

/// Substring the backend puts in scheduling-conflict rejections
const CONFLICT_MARKER: &str = "conflicto";

/// Errors surfaced by the API client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network failure, CORS, aborted)
    #[error("fallo de red: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be decoded
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// The shapes a server error body may take on the wire
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServerErrorBody {
    Detailed {
        code: u16,
        message: String,
        #[serde(default)]
        details: Option<serde_json::Value>,
    },
    Message {
        message: String,
    },
    Legacy {
        error: String,
    },
}

impl ServerErrorBody {
    fn into_message(self) -> String {
        match self {
            ServerErrorBody::Detailed { message, .. } => message,
            ServerErrorBody::Message { message } => message,
            ServerErrorBody::Legacy { error } => error,
        }
    }
}

impl ApiError {
    /// Normalize a non-success HTTP response into a [`ApiError::Rejected`].
    ///
    /// Falls back to the raw body, then to the bare status code, when the
    /// body is not one of the known JSON shapes.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServerErrorBody>(body)
            .map(ServerErrorBody::into_message)
            .unwrap_or_else(|_| {
                let raw = body.trim();
                if raw.is_empty() {
                    format!("HTTP {status}")
                } else {
                    raw.to_string()
                }
            });
        ApiError::Rejected { status, message }
    }

    /// True when the server rejected the request because of an
    /// overlapping-reservation conflict
    pub fn is_conflict(&self) -> bool {
        match self {
            ApiError::Rejected { message, .. } => {
                message.to_lowercase().contains(CONFLICT_MARKER)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_error_body_is_normalized() {
        let err = ApiError::from_response(409, r#"{"error": "Conflicto de horario"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 409,
                message: "Conflicto de horario".to_string()
            }
        );
    }

    #[test]
    fn message_body_is_normalized() {
        let err = ApiError::from_response(400, r#"{"message": "fecha inválida"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: "fecha inválida".to_string()
            }
        );
    }

    #[test]
    fn detailed_body_is_normalized() {
        let body = r#"{"code": 409, "message": "Conflicto de reserva", "details": {"cabana_id": 3}}"#;
        let err = ApiError::from_response(409, body);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 409,
                message: "Conflicto de reserva".to_string()
            }
        );
    }

    #[test]
    fn unknown_body_falls_back_to_raw_text() {
        let err = ApiError::from_response(500, "boom");
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "  ");
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }

    #[test]
    fn conflict_is_detected_case_insensitively() {
        let err = ApiError::from_response(409, r#"{"error": "CONFLICTO: ya existe una reserva"}"#);
        assert!(err.is_conflict());
    }

    #[test]
    fn generic_rejection_is_not_a_conflict() {
        let err = ApiError::from_response(400, r#"{"error": "cabaña inexistente"}"#);
        assert!(!err.is_conflict());
    }

    #[test]
    fn transport_errors_are_never_conflicts() {
        assert!(!ApiError::Transport("timeout".to_string()).is_conflict());
    }
}
