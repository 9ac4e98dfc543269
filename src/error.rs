use thiserror::Error;

/// Main error type for the NSG sample
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Azure API error (HTTP {status}{}): {message}", code_suffix(.code))]
    AzureApiError {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("{resource_type} not found: {name}")]
    ResourceNotFound { resource_type: String, name: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Connection timeout: {0}")]
    ConnectionTimeout(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Long-running operation {status}: {message}")]
    OperationFailed { status: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration loading error: {0}")]
    ConfigLoadError(#[from] config::ConfigError),

    #[error("Operation timeout")]
    Timeout,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SampleError {
    pub fn authentication<S: Into<String>>(msg: S) -> Self {
        Self::AuthenticationError(msg.into())
    }

    pub fn azure_api<S: Into<String>>(status: u16, code: Option<String>, message: S) -> Self {
        Self::AzureApiError {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn resource_not_found<T: Into<String>, N: Into<String>>(resource_type: T, name: N) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::NetworkError(msg.into())
    }

    pub fn connection_timeout<S: Into<String>>(msg: S) -> Self {
        Self::ConnectionTimeout(msg.into())
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::SerializationError(msg.into())
    }

    pub fn operation_failed<S: Into<String>, M: Into<String>>(status: S, message: M) -> Self {
        Self::OperationFailed {
            status: status.into(),
            message: message.into(),
        }
    }

    pub fn unknown<S: Into<String>>(msg: S) -> Self {
        Self::Unknown(msg.into())
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(", {c}")).unwrap_or_default()
}

/// Result type alias for sample operations
pub type Result<T> = std::result::Result<T, SampleError>;

/// Convert Azure Core errors to SampleError
impl From<azure_core::Error> for SampleError {
    fn from(error: azure_core::Error) -> Self {
        Self::AuthenticationError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_api_error_display_with_code() {
        let err = SampleError::azure_api(409, Some("Conflict".to_string()), "name in use");
        assert_eq!(err.to_string(), "Azure API error (HTTP 409, Conflict): name in use");
    }

    #[test]
    fn test_azure_api_error_display_without_code() {
        let err = SampleError::azure_api(500, None, "boom");
        assert_eq!(err.to_string(), "Azure API error (HTTP 500): boom");
    }

    #[test]
    fn test_resource_not_found_display() {
        let err = SampleError::resource_not_found("Network security group", "sample-rust-nsg");
        assert_eq!(
            err.to_string(),
            "Network security group not found: sample-rust-nsg"
        );
    }
}
