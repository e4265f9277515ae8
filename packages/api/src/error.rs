//! Failure classification for API calls.
//!
//! Every call either succeeds or ends in exactly one [`ApiError`]. Nothing is
//! retried; the page shows [`ApiError::user_message`] inline and waits for the
//! user to act again.

use serde::Deserialize;
use thiserror::Error;

use crate::transport::{ApiResponse, TransportError};

/// Shown when the ownership gate refuses a delete.
pub const NO_PERMISSION_MESSAGE: &str = "You do not have permission to delete this post";

/// Shown when a privileged action is attempted without a session token.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to continue";

const MAX_TEXT_MESSAGE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No token was found before a privileged call; nothing was sent.
    #[error("no session token, login required")]
    MissingSession,

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401: the server did not accept the token.
    #[error("not authenticated")]
    Unauthenticated { message: Option<String> },

    /// Any other 4xx: the server refused the input or the action.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// HTTP 404.
    #[error("not found")]
    NotFound { message: Option<String> },

    /// 5xx or an unexpected status.
    #[error("server error with status {status}")]
    Server { status: u16, message: Option<String> },

    /// The local ownership list does not contain the post; nothing was sent.
    #[error("post {post_id} is not owned by this session")]
    PermissionDenied { post_id: String },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The login or register response carried no token.
    #[error("authentication response did not include a token")]
    MissingToken,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(response: &ApiResponse) -> Self {
        let message = server_message(&response.body);
        match response.status {
            401 => ApiError::Unauthenticated { message },
            404 => ApiError::NotFound { message },
            status @ 400..=499 => ApiError::Rejected { status, message },
            status => ApiError::Server { status, message },
        }
    }

    /// Message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthenticated { message }
            | ApiError::Rejected { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message verbatim when there is
    /// one, a fixed local message for local refusals, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::MissingSession => LOGIN_REQUIRED_MESSAGE.to_string(),
            ApiError::PermissionDenied { .. } => NO_PERMISSION_MESSAGE.to_string(),
            other => other
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Whether the caller should be sent to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::MissingSession | ApiError::Unauthenticated { .. }
        )
    }

    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated { .. } => Some(401),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Network(e.0)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Deserialize)]
struct FieldError {
    msg: String,
}

/// Extract a human-readable message from an error body.
///
/// Understands `{"msg": "..."}`, validation lists
/// `{"errors": [{"msg": "..."}, ...]}` and short plain-text bodies.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.msg.filter(|m| !m.trim().is_empty()) {
            return Some(msg);
        }
        let joined = parsed
            .errors
            .into_iter()
            .map(|e| e.msg)
            .filter(|m| !m.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        return (!joined.is_empty()).then_some(joined);
    }

    if serde_json::from_str::<serde_json::Value>(body).is_ok()
        || body.starts_with('<')
        || body.len() > MAX_TEXT_MESSAGE_LEN
    {
        return None;
    }
    Some(body.to_string())
}
