use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The backend answered with a structured error payload; the message is
    /// safe to surface verbatim.
    Api(String),
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(message) => write!(formatter, "{message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Classifies a non-2xx response body. A body carrying an explicit `error`
/// string becomes `AppError::Api`; anything else stays an opaque HTTP error.
pub(crate) fn error_from_body(status: u16, body: String) -> AppError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        if let Some(message) = parsed.error {
            if !message.trim().is_empty() {
                return AppError::Api(message);
            }
        }
    }

    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub(crate) fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
