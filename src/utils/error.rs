use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumfinError {
    #[error("Error fetching data: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Datastore request failed: {0}")]
    HttpStatusError(StatusText),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Status line of a failed response, e.g. "404 Not Found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText(pub String);

impl StatusText {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.canonical_reason() {
            Some(reason) => Self(format!("{} {}", status.as_u16(), reason)),
            None => Self(status.as_u16().to_string()),
        }
    }
}

impl std::fmt::Display for StatusText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Result<T> = std::result::Result<T, HumfinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_known_code() {
        let text = StatusText::from_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(text.0, "404 Not Found");
    }

    #[test]
    fn test_status_error_message() {
        let err = HumfinError::HttpStatusError(StatusText::from_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ));
        assert_eq!(
            err.to_string(),
            "Datastore request failed: 500 Internal Server Error"
        );
    }
}
