//! Shared helpers for HTTP-level tests

#![allow(dead_code)]

use async_trait::async_trait;
use azure_core::auth::AccessToken;
use azure_nsg_sample::arm::ArmClient;
use azure_nsg_sample::auth::AzureAuthProvider;
use azure_nsg_sample::utils::RetryOptions;
use azure_nsg_sample::Result;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

pub const SUBSCRIPTION_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const GROUP: &str = "azure-nsg-sample-group";
pub const TOKEN: &str = "test-access-token";

/// Auth provider that hands out a fixed bearer token
pub struct StaticTokenProvider;

#[async_trait]
impl AzureAuthProvider for StaticTokenProvider {
    async fn get_token(&self, _scopes: &[&str]) -> Result<AccessToken> {
        Ok(AccessToken::new(
            TOKEN.to_string(),
            OffsetDateTime::now_utc() + time::Duration::hours(1),
        ))
    }
}

/// ARM client pointed at a mock server, with near-zero retry and poll delays
pub fn test_client(base_url: &str) -> Arc<ArmClient> {
    let client = ArmClient::new(
        Arc::new(StaticTokenProvider),
        SUBSCRIPTION_ID.to_string(),
        base_url,
    )
    .unwrap()
    .with_retry_options(RetryOptions {
        max_retries: 2,
        initial_interval: Duration::from_millis(1),
        max_interval: Duration::from_millis(5),
        multiplier: 2.0,
    })
    .with_polling(Duration::from_millis(5), 5);

    Arc::new(client)
}

pub fn group_path() -> String {
    format!("/subscriptions/{SUBSCRIPTION_ID}/resourceGroups/{GROUP}")
}

pub fn network_path(resource: &str) -> String {
    format!("{}/providers/Microsoft.Network/{}", group_path(), resource)
}
