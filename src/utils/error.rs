use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP error: {status}")]
    HttpStatusError { status: u16 },

    #[error("JSON decode error: {snippet}")]
    DecodeError { snippet: String },

    #[error("{message}")]
    CarrierError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Carrier,
    Configuration,
    Input,
    System,
}

impl TrackerError {
    /// 截斷回應內容，避免把整個 HTML 錯誤頁塞進錯誤訊息
    pub fn decode(body: &str) -> Self {
        Self::DecodeError {
            snippet: body.chars().take(200).collect(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::DecodeError { .. } | Self::CarrierError { .. } => ErrorCategory::Carrier,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the carrier: {}", self),
            ErrorCategory::Carrier => format!("The carrier returned an unexpected response: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again later",
            ErrorCategory::Carrier => "The carrier site may be down or changed; try again later",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Input => "Provide at least one valid tracking number",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_truncates_body() {
        let body = "x".repeat(500);
        let err = TrackerError::decode(&body);
        assert_eq!(err.to_string(), format!("JSON decode error: {}", "x".repeat(200)));
        assert_eq!(err.category(), ErrorCategory::Carrier);
    }

    #[test]
    fn test_decode_error_truncates_on_char_boundary() {
        let body = "Σφάλμα".repeat(100);
        let err = TrackerError::decode(&body);
        if let TrackerError::DecodeError { snippet } = err {
            assert_eq!(snippet.chars().count(), 200);
        } else {
            panic!("expected decode error");
        }
    }

    #[test]
    fn test_http_status_message() {
        let err = TrackerError::HttpStatusError { status: 503 };
        assert_eq!(err.to_string(), "HTTP error: 503");
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_serde_json_error_converts_to_system_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TrackerError = source.into();
        assert!(matches!(err, TrackerError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_validation_error_is_input_category() {
        let err = TrackerError::validation("trackingNumbers must not be empty");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("must not be empty"));
    }
}
