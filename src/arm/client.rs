//! Azure Resource Manager REST client
//!
//! Both the resource-management and network-management operations go through
//! this client. It owns token acquisition, error decoding, retry of transient
//! failures and polling of long-running PUTs.

use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::models::{ArmErrorResponse, ArmList, AsyncOperationStatus};
use crate::auth::provider::AzureAuthProvider;
use crate::error::{Result, SampleError};
use crate::utils::network::{classify_network_error, create_http_client, NetworkConfig};
use crate::utils::retry::{retry_with_backoff, RetryOptions};

/// Token scope for Azure Resource Manager
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

const ASYNC_OPERATION_HEADER: &str = "Azure-AsyncOperation";
const LOCATION_HEADER: &str = "Location";

pub struct ArmClient {
    auth_provider: Arc<dyn AzureAuthProvider>,
    http_client: Client,
    endpoint: String,
    subscription_id: String,
    retry_options: RetryOptions,
    poll_interval: Duration,
    max_poll_attempts: usize,
}

impl ArmClient {
    pub fn new(
        auth_provider: Arc<dyn AzureAuthProvider>,
        subscription_id: String,
        endpoint: &str,
    ) -> Result<Self> {
        let network_config = NetworkConfig::default();
        let http_client = create_http_client(&network_config)?;

        Ok(Self {
            auth_provider,
            http_client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription_id,
            retry_options: RetryOptions {
                max_retries: 3,
                initial_interval: Duration::from_millis(1000),
                max_interval: Duration::from_millis(10000),
                multiplier: 2.0,
            },
            poll_interval: Duration::from_secs(5),
            max_poll_attempts: 120,
        })
    }

    pub fn with_retry_options(mut self, retry_options: RetryOptions) -> Self {
        self.retry_options = retry_options;
        self
    }

    /// Override how long-running operations are polled
    pub fn with_polling(mut self, interval: Duration, max_attempts: usize) -> Self {
        self.poll_interval = interval;
        self.max_poll_attempts = max_attempts;
        self
    }

    /// ARM path of a resource group, the root of every other sample resource
    pub fn resource_group_path(&self, resource_group: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, resource_group
        )
    }

    pub fn build_url(&self, path: &str, api_version: &str) -> String {
        format!("{}{}?api-version={}", self.endpoint, path, api_version)
    }

    async fn create_headers(&self) -> Result<HeaderMap> {
        let token = self.auth_provider.get_token(&[ARM_SCOPE]).await?;
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", token.token.secret())
                .parse()
                .map_err(|e| SampleError::authentication(format!("Invalid token format: {}", e)))?,
        );
        headers.insert(
            "Content-Type",
            "application/json"
                .parse()
                .map_err(|e| SampleError::unknown(format!("Invalid header value: {}", e)))?,
        );
        Ok(headers)
    }

    /// Decode an ARM error body, falling back to the raw text
    pub fn parse_azure_error(status: u16, body: &str) -> SampleError {
        match serde_json::from_str::<ArmErrorResponse>(body) {
            Ok(parsed) => SampleError::azure_api(
                status,
                parsed.error.code,
                parsed.error.message.unwrap_or_else(|| body.to_string()),
            ),
            Err(_) => SampleError::azure_api(status, None, body.to_string()),
        }
    }

    async fn error_for_status(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_body = match response.text().await {
            Ok(body) if !body.trim().is_empty() => body,
            _ => status_reason(status),
        };
        Err(Self::parse_azure_error(status.as_u16(), &error_body))
    }

    async fn execute_with_retry<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        retry_with_backoff(operation, self.retry_options.clone()).await
    }

    async fn send_get(&self, url: &str) -> Result<Response> {
        self.execute_with_retry(|| async {
            let headers = self.create_headers().await?;
            debug!(%url, "GET");
            let response = self
                .http_client
                .get(url)
                .headers(headers)
                .send()
                .await
                .map_err(|e| classify_network_error(&e, url))?;

            // 404 is an answer, not a failure; callers decide what it means
            if response.status() == StatusCode::NOT_FOUND {
                return Ok(response);
            }
            Self::error_for_status(response).await
        })
        .await
    }

    /// Create or update a resource and return its final state.
    ///
    /// When the service answers with an `Azure-AsyncOperation` URL, or with a
    /// `202` and a `Location` URL, the call waits for that operation and
    /// re-reads the resource.
    pub async fn put_resource<B, T>(&self, path: &str, api_version: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.build_url(path, api_version);

        let response = self
            .execute_with_retry(|| async {
                let headers = self.create_headers().await?;
                debug!(%url, "PUT");
                let response = self
                    .http_client
                    .put(&url)
                    .headers(headers)
                    .json(body)
                    .send()
                    .await
                    .map_err(|e| classify_network_error(&e, &url))?;
                Self::error_for_status(response).await
            })
            .await?;

        let async_operation = header_value(&response, ASYNC_OPERATION_HEADER);
        let location = header_value(&response, LOCATION_HEADER);

        match async_operation {
            Some(operation_url) => {
                self.wait_for_async_operation(&operation_url).await?;
                self.get_resource(path, api_version).await
            }
            None if response.status() == StatusCode::ACCEPTED => {
                if let Some(location_url) = location {
                    self.wait_for_location(&location_url).await?;
                }
                self.get_resource(path, api_version).await
            }
            None => response.json::<T>().await.map_err(|e| {
                SampleError::serialization(format!("Failed to parse response from {}: {}", path, e))
            }),
        }
    }

    /// Fetch a single resource; a 404 becomes `ResourceNotFound`
    pub async fn get_resource<T>(&self, path: &str, api_version: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.build_url(path, api_version);
        let response = self.send_get(&url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            let (resource_type, name) = split_resource_path(path);
            return Err(SampleError::resource_not_found(resource_type, name));
        }

        response.json::<T>().await.map_err(|e| {
            SampleError::serialization(format!("Failed to parse response from {}: {}", path, e))
        })
    }

    /// List a collection, following `nextLink` until the last page
    pub async fn list_resources<T>(&self, path: &str, api_version: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut next_url = Some(self.build_url(path, api_version));

        while let Some(url) = next_url.take() {
            let response = self.send_get(&url).await?;
            let response = Self::error_for_status(response).await?;
            let page: ArmList<T> = response.json().await.map_err(|e| {
                SampleError::serialization(format!("Failed to parse list from {}: {}", path, e))
            })?;

            items.extend(page.value);
            next_url = page.next_link.filter(|link| !link.is_empty());
        }

        Ok(items)
    }

    async fn wait_for_async_operation(&self, operation_url: &str) -> Result<()> {
        for attempt in 1..=self.max_poll_attempts {
            let response = self.send_get(operation_url).await?;
            let retry_after = retry_after(&response);

            let response = Self::error_for_status(response).await?;
            let operation: AsyncOperationStatus = response.json().await.map_err(|e| {
                SampleError::serialization(format!("Failed to parse operation status: {}", e))
            })?;

            if operation.is_succeeded() {
                return Ok(());
            }
            if operation.is_terminal_failure() {
                let message = operation
                    .error
                    .and_then(|e| e.message.or(e.code))
                    .unwrap_or_else(|| "no error details".to_string());
                return Err(SampleError::operation_failed(operation.status, message));
            }

            debug!(attempt, status = %operation.status, "operation still running");
            tokio::time::sleep(retry_after.unwrap_or(self.poll_interval)).await;
        }

        Err(SampleError::Timeout)
    }

    /// Poll a `Location` URL until it stops answering `202 Accepted`
    async fn wait_for_location(&self, location_url: &str) -> Result<()> {
        for attempt in 1..=self.max_poll_attempts {
            let response = self.send_get(location_url).await?;
            if response.status() != StatusCode::ACCEPTED {
                Self::error_for_status(response).await?;
                return Ok(());
            }

            debug!(attempt, "operation still accepted");
            tokio::time::sleep(retry_after(&response).unwrap_or(self.poll_interval)).await;
        }

        Err(SampleError::Timeout)
    }
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Message used when an error response has no readable body
fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Split `.../{type}/{name}` into its last two segments
fn split_resource_path(path: &str) -> (String, String) {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let name = segments.next().unwrap_or_default().to_string();
    let resource_type = segments.next().unwrap_or("resource").to_string();
    (resource_type, name)
}
