//! Authentication provider trait and implementations
//!
//! The workflow only ever authenticates as a service principal, so there is a
//! single concrete provider wrapping `azure_identity::ClientSecretCredential`.

use async_trait::async_trait;
use azure_core::auth::{AccessToken, TokenCredential};
use azure_identity::ClientSecretCredential;
use std::sync::Arc;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::Credentials;
use crate::error::{Result, SampleError};

/// Default Azure AD authority host
pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Trait for Azure authentication providers
#[async_trait]
pub trait AzureAuthProvider: Send + Sync {
    /// Get an access token for the specified scopes
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken>;
}

/// Client Secret Authentication Provider
pub struct ClientSecretProvider {
    credential: Arc<ClientSecretCredential>,
}

impl ClientSecretProvider {
    /// Create a new ClientSecretProvider
    pub fn new(tenant_id: String, client_id: String, client_secret: Zeroizing<String>) -> Result<Self> {
        let authority_url = url::Url::parse(AUTHORITY_HOST)
            .map_err(|e| SampleError::config(format!("Invalid authority URL: {}", e)))?;

        debug!(%tenant_id, %client_id, "using service principal");
        let credential = Arc::new(ClientSecretCredential::new(
            azure_core::new_http_client(),
            authority_url,
            tenant_id,
            client_id,
            client_secret.as_str().to_string(),
        ));

        Ok(Self { credential })
    }

    /// Build a provider from the service-principal credentials in settings
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let tenant_id = required(&credentials.tenant_id, "AZURE_TENANT_ID")?;
        let client_id = required(&credentials.client_id, "AZURE_CLIENT_ID")?;
        let client_secret = credentials
            .client_secret
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SampleError::config("AZURE_CLIENT_SECRET is not set"))?;

        Self::new(tenant_id, client_id, client_secret)
    }
}

fn required(value: &Option<String>, var: &str) -> Result<String> {
    value
        .as_ref()
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| SampleError::config(format!("{} is not set", var)))
}

#[async_trait]
impl AzureAuthProvider for ClientSecretProvider {
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken> {
        debug!(?scopes, "requesting token");
        let token_response = self
            .credential
            .get_token(scopes)
            .await
            .map_err(|e| SampleError::authentication(format!("Failed to get token: {}", e)))?;

        Ok(token_response)
    }
}
