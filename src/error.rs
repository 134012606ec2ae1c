//! Error taxonomy and the shared wire mapping.
//!
//! Every failure either adapter can report comes from this closed set. The
//! user-facing message, detail text, machine code and HTTP status for each
//! variant are defined here once so the standalone server and the
//! single-invocation handler cannot drift apart.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using [`ServiceError`].
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Unified error type for the relay and delivery services.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Mail transport credentials are absent from the environment.
    #[error("mail transport is not configured")]
    MissingConfiguration,

    /// One or more submission fields are missing or empty.
    #[error("missing required fields")]
    MissingFields,

    /// The submitted email address does not match `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,

    /// The mail transport rejected our credentials.
    #[error("mail transport authentication failed: {detail}")]
    TransportAuth {
        /// Diagnostic detail from the transport.
        detail: String,
    },

    /// The mail transport could not be reached.
    #[error("mail transport unreachable: {detail}")]
    TransportConnection {
        /// Diagnostic detail from the transport.
        detail: String,
    },

    /// The mail transport failed for any other reason.
    #[error("mail transport error: {detail}")]
    TransportOther {
        /// Diagnostic detail from the transport.
        detail: String,
    },

    /// The resume file is absent at the configured path.
    #[error("resume file not found")]
    ResumeNotFound,

    /// The resume file exists but could not be read.
    #[error("failed to read resume file: {0}")]
    ResumeRead(#[from] std::io::Error),
}

/// JSON body carried by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// User-facing message.
    pub message: String,
    /// Supporting detail, omitted where the contract sends `message` alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable code, present for transport failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ServiceError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingFields | Self::InvalidEmail => 400,
            Self::ResumeNotFound => 404,
            _ => 500,
        }
    }

    /// User-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingConfiguration => {
                "Server configuration error. Email service not configured."
            }
            Self::MissingFields => "All fields are required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::TransportAuth { .. } => {
                "Email authentication failed. Please check email credentials."
            }
            Self::TransportConnection { .. } => {
                "Connection error. Please check your internet connection."
            }
            Self::TransportOther { .. } => "Failed to send message. Please try again.",
            Self::ResumeNotFound => "Resume not found",
            Self::ResumeRead(_) => "Error downloading resume",
        }
    }

    /// Machine-readable code, for transport failures only.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::TransportAuth { .. } => Some("auth"),
            Self::TransportConnection { .. } => Some("connection"),
            Self::TransportOther { .. } => Some("transport"),
            _ => None,
        }
    }

    /// Supporting detail included in the response body.
    ///
    /// Resume failures carry `message` alone; transport failures echo the
    /// diagnostic detail that is also logged server-side.
    fn detail(&self) -> Option<String> {
        match self {
            Self::MissingConfiguration => Some(
                "Missing email credentials. Set MAIL_API_URL, MAIL_ACCOUNT and MAIL_TOKEN in the environment"
                    .to_string(),
            ),
            Self::MissingFields => Some("Missing required fields".to_string()),
            Self::InvalidEmail => Some("Invalid email format".to_string()),
            Self::TransportAuth { detail }
            | Self::TransportConnection { detail }
            | Self::TransportOther { detail } => Some(detail.clone()),
            Self::ResumeNotFound | Self::ResumeRead(_) => None,
        }
    }

    /// Build the wire body for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.user_message().to_string(),
            error: self.detail(),
            code: self.code().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert_eq!(ServiceError::MissingFields.status(), 400);
        assert_eq!(ServiceError::InvalidEmail.status(), 400);
        assert_eq!(ServiceError::MissingConfiguration.status(), 500);
        assert_eq!(ServiceError::ResumeNotFound.status(), 404);
    }

    #[test]
    fn test_transport_codes() {
        let auth = ServiceError::TransportAuth {
            detail: "401".to_string(),
        };
        let conn = ServiceError::TransportConnection {
            detail: "refused".to_string(),
        };
        let other = ServiceError::TransportOther {
            detail: "boom".to_string(),
        };
        assert_eq!(auth.code(), Some("auth"));
        assert_eq!(conn.code(), Some("connection"));
        assert_eq!(other.code(), Some("transport"));
        assert_eq!(ServiceError::MissingFields.code(), None);
    }

    #[test]
    fn test_each_transport_class_has_distinct_message() {
        let messages = [
            ServiceError::TransportAuth {
                detail: String::new(),
            }
            .user_message(),
            ServiceError::TransportConnection {
                detail: String::new(),
            }
            .user_message(),
            ServiceError::TransportOther {
                detail: String::new(),
            }
            .user_message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_not_found_body_is_message_only() {
        let body = serde_json::to_value(ServiceError::ResumeNotFound.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Resume not found" }));
    }

    #[test]
    fn test_transport_body_carries_detail_and_code() {
        let err = ServiceError::TransportAuth {
            detail: "HTTP 401: bad token".to_string(),
        };
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(
            body["message"],
            "Email authentication failed. Please check email credentials."
        );
        assert_eq!(body["error"], "HTTP 401: bad token");
        assert_eq!(body["code"], "auth");
    }
}
