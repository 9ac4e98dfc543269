use crate::error::{Result, SampleError};
use reqwest::Client;
use std::time::Duration;

/// Configuration for HTTP client with proper timeouts
pub struct NetworkConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(120),
            user_agent: format!("nsg-sample/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Create a properly configured HTTP client with timeouts
pub fn create_http_client(config: &NetworkConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| SampleError::network(format!("Failed to create HTTP client: {}", e)))
}

/// Turn a transport-level reqwest failure into a SampleError
pub fn classify_network_error(error: &reqwest::Error, url: &str) -> SampleError {
    let host = extract_host(url);

    if error.is_timeout() {
        return SampleError::connection_timeout(format!(
            "Request to '{}' timed out",
            host
        ));
    }

    if error.is_connect() {
        return SampleError::network(format!(
            "Failed to connect to '{}': {}. Check your network connection.",
            host, error
        ));
    }

    if let Some(status) = error.status() {
        match status.as_u16() {
            502..=504 => {
                return SampleError::network(format!(
                    "Gateway error {} from '{}'. The Azure service may be temporarily unavailable.",
                    status.as_u16(),
                    host
                ))
            }
            _ => {}
        }
    }

    SampleError::network(format!("Network error when calling '{}': {}", host, error))
}

fn extract_host(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| "unknown-host".to_string())
}

/// Check if an error is worth retrying
pub fn is_retryable_error(error: &SampleError) -> bool {
    match error {
        SampleError::ConnectionTimeout(_) => true,
        SampleError::NetworkError(msg) => {
            let msg_lower = msg.to_lowercase();
            msg_lower.contains("timed out")
                || msg_lower.contains("temporarily")
                || msg_lower.contains("gateway")
        }
        SampleError::AzureApiError { status, code, .. } => {
            matches!(status, 429 | 502 | 503 | 504)
                || code
                    .as_deref()
                    .map(|c| c.to_lowercase().contains("throttl"))
                    .unwrap_or(false)
        }
        _ => false,
    }
}
