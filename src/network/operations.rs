//! Network operations implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::models::{NetworkSecurityGroup, SecurityRule, VirtualNetwork};
use crate::arm::ArmClient;
use crate::error::Result;

/// API version for `Microsoft.Network` resources
pub const NETWORK_API_VERSION: &str = "2023-09-01";

/// Trait for network-management operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkOperations: Send + Sync {
    async fn create_or_update_network_security_group(
        &self,
        resource_group: &str,
        name: &str,
        parameters: &NetworkSecurityGroup,
    ) -> Result<NetworkSecurityGroup>;

    async fn get_network_security_group(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup>;

    async fn create_or_update_virtual_network(
        &self,
        resource_group: &str,
        name: &str,
        parameters: &VirtualNetwork,
    ) -> Result<VirtualNetwork>;

    /// List the custom rules of a network security group
    async fn list_security_rules(
        &self,
        resource_group: &str,
        nsg_name: &str,
    ) -> Result<Vec<SecurityRule>>;

    async fn create_or_update_security_rule(
        &self,
        resource_group: &str,
        nsg_name: &str,
        rule_name: &str,
        parameters: &SecurityRule,
    ) -> Result<SecurityRule>;
}

/// Network management client backed by the ARM REST API
pub struct AzureNetworkOperations {
    client: Arc<ArmClient>,
}

impl AzureNetworkOperations {
    pub fn new(client: Arc<ArmClient>) -> Self {
        Self { client }
    }

    fn provider_path(&self, resource_group: &str, resource: &str) -> String {
        format!(
            "{}/providers/Microsoft.Network/{}",
            self.client.resource_group_path(resource_group),
            resource
        )
    }

    fn nsg_path(&self, resource_group: &str, name: &str) -> String {
        self.provider_path(resource_group, &format!("networkSecurityGroups/{}", name))
    }
}

#[async_trait]
impl NetworkOperations for AzureNetworkOperations {
    async fn create_or_update_network_security_group(
        &self,
        resource_group: &str,
        name: &str,
        parameters: &NetworkSecurityGroup,
    ) -> Result<NetworkSecurityGroup> {
        info!(resource_group, nsg = name, "creating network security group");
        let path = self.nsg_path(resource_group, name);
        self.client
            .put_resource(&path, NETWORK_API_VERSION, parameters)
            .await
    }

    async fn get_network_security_group(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<NetworkSecurityGroup> {
        let path = self.nsg_path(resource_group, name);
        self.client.get_resource(&path, NETWORK_API_VERSION).await
    }

    async fn create_or_update_virtual_network(
        &self,
        resource_group: &str,
        name: &str,
        parameters: &VirtualNetwork,
    ) -> Result<VirtualNetwork> {
        info!(resource_group, vnet = name, "creating virtual network");
        let path = self.provider_path(resource_group, &format!("virtualNetworks/{}", name));
        self.client
            .put_resource(&path, NETWORK_API_VERSION, parameters)
            .await
    }

    async fn list_security_rules(
        &self,
        resource_group: &str,
        nsg_name: &str,
    ) -> Result<Vec<SecurityRule>> {
        let path = format!("{}/securityRules", self.nsg_path(resource_group, nsg_name));
        self.client.list_resources(&path, NETWORK_API_VERSION).await
    }

    async fn create_or_update_security_rule(
        &self,
        resource_group: &str,
        nsg_name: &str,
        rule_name: &str,
        parameters: &SecurityRule,
    ) -> Result<SecurityRule> {
        info!(
            resource_group,
            nsg = nsg_name,
            rule = rule_name,
            priority = parameters.priority(),
            "creating security rule"
        );
        let path = format!(
            "{}/securityRules/{}",
            self.nsg_path(resource_group, nsg_name),
            rule_name
        );
        self.client
            .put_resource(&path, NETWORK_API_VERSION, parameters)
            .await
    }
}
