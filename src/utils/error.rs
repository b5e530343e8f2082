use thiserror::Error;

/// 問題長度上限 (以字元計)
pub const MAX_QUESTION_CHARS: usize = 400;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("Please enter a question or thought.")]
    EmptyQuestion,

    #[error("Keep it under {max} characters.")]
    QuestionTooLong { max: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FortuneError {
    /// Errors caused by the caller's input rather than by the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FortuneError::EmptyQuestion | FortuneError::QuestionTooLong { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FortuneError::EmptyQuestion | FortuneError::QuestionTooLong { .. } => {
                "Send a non-empty question of at most 400 characters"
            }
            FortuneError::IoError(_) => "Check that the configuration file exists and is readable",
            FortuneError::SerializationError(_) => "Check the JSON payload",
            FortuneError::ConfigError { .. }
            | FortuneError::ConfigValidationError { .. }
            | FortuneError::InvalidConfigValueError { .. } => {
                "Check the configuration file, DEDALUS_* environment variables and CLI flags"
            }
        }
    }
}

/// Failure of a single remote generation attempt.
///
/// Display strings are short and category-level: they end up in the
/// `details` field of client responses, so they never carry URLs, keys or
/// raw response bodies. The underlying cause stays reachable through
/// [`std::error::Error::source`] for logging.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Missing API key or base URL")]
    MissingCredentials,

    #[error("Remote service unreachable ({})", transport_kind(.0))]
    Transport(#[source] reqwest::Error),

    #[error("Remote service returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Remote response was not valid JSON")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Remote response had no message content")]
    MissingContent,

    #[error("Message content was not a valid fortune JSON object")]
    MalformedContent(#[source] serde_json::Error),
}

impl RemoteError {
    pub fn category(&self) -> &'static str {
        match self {
            RemoteError::MissingCredentials => "missing_credentials",
            RemoteError::Transport(_) => "transport",
            RemoteError::HttpStatus { .. } => "http_status",
            RemoteError::MalformedResponse(_) => "malformed_response",
            RemoteError::MissingContent => "missing_content",
            RemoteError::MalformedContent(_) => "malformed_content",
        }
    }
}

fn transport_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_decode() || err.is_body() {
        "incomplete body"
    } else {
        "request failed"
    }
}

pub type Result<T> = std::result::Result<T, FortuneError>;
