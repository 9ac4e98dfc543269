//! Resource group operations implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::models::ResourceGroup;
use crate::arm::ArmClient;
use crate::error::Result;

/// API version for `Microsoft.Resources/resourceGroups`
pub const RESOURCES_API_VERSION: &str = "2021-04-01";

/// Trait for resource-management operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceOperations: Send + Sync {
    /// Create a resource group, or update it in place if it already exists
    async fn create_or_update_resource_group(
        &self,
        name: &str,
        parameters: &ResourceGroup,
    ) -> Result<ResourceGroup>;

    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup>;
}

/// Resource management client backed by the ARM REST API
pub struct AzureResourceOperations {
    client: Arc<ArmClient>,
}

impl AzureResourceOperations {
    pub fn new(client: Arc<ArmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceOperations for AzureResourceOperations {
    async fn create_or_update_resource_group(
        &self,
        name: &str,
        parameters: &ResourceGroup,
    ) -> Result<ResourceGroup> {
        info!(resource_group = name, location = %parameters.location, "creating resource group");
        let path = self.client.resource_group_path(name);
        self.client
            .put_resource(&path, RESOURCES_API_VERSION, parameters)
            .await
    }

    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup> {
        let path = self.client.resource_group_path(name);
        self.client.get_resource(&path, RESOURCES_API_VERSION).await
    }
}
