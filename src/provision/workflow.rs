//! The provisioning call sequence
//!
//! Steps run strictly in order and the first failure ends the run; nothing is
//! retried or rolled back at this level.

use std::io::Write;
use tracing::info;

use super::sample::{self, NSG_NAME, VNET_NAME};
use crate::error::Result;
use crate::network::{NetworkOperations, NetworkSecurityGroup, SecurityRule, SecurityRuleRow, VirtualNetwork};
use crate::resources::{ResourceGroup, ResourceOperations};
use crate::utils::format::{format_table, DisplayUtils};

/// Everything the workflow created or read, in the order it happened
#[derive(Debug, Clone)]
pub struct ProvisioningReport {
    pub resource_group: ResourceGroup,
    pub network_security_group: NetworkSecurityGroup,
    pub virtual_network: VirtualNetwork,
    pub rules_before: Vec<SecurityRule>,
    pub created_rules: Vec<SecurityRule>,
    pub rules_after: Vec<SecurityRule>,
    pub final_network_security_group: NetworkSecurityGroup,
}

pub struct ProvisioningWorkflow<'a> {
    resources: &'a dyn ResourceOperations,
    network: &'a dyn NetworkOperations,
    display: DisplayUtils,
    no_color: bool,
    location: String,
    resource_group: String,
}

impl<'a> ProvisioningWorkflow<'a> {
    pub fn new(
        resources: &'a dyn ResourceOperations,
        network: &'a dyn NetworkOperations,
        location: &str,
        resource_group: &str,
        no_color: bool,
    ) -> Self {
        Self {
            resources,
            network,
            display: DisplayUtils::new(no_color),
            no_color,
            location: location.to_string(),
            resource_group: resource_group.to_string(),
        }
    }

    pub async fn run(&self, out: &mut dyn Write) -> Result<ProvisioningReport> {
        let group_name = self.resource_group.as_str();

        self.display.print_header(out, "Create Resource Group")?;
        let resource_group = self
            .resources
            .create_or_update_resource_group(group_name, &ResourceGroup::new(&self.location))
            .await?;
        self.display.print_resource(out, &resource_group)?;

        self.display
            .print_header(out, &format!("Creating NSG named '{}'", NSG_NAME))?;
        let network_security_group = self
            .network
            .create_or_update_network_security_group(
                group_name,
                NSG_NAME,
                &NetworkSecurityGroup::new(&self.location),
            )
            .await?;
        self.display.print_resource(out, &network_security_group)?;

        self.display.print_header(out, "Creating a virtual network")?;
        let vnet_parameters =
            sample::virtual_network_parameters(&self.location, &network_security_group);
        let virtual_network = self
            .network
            .create_or_update_virtual_network(group_name, VNET_NAME, &vnet_parameters)
            .await?;
        self.display.print_resource(out, &virtual_network)?;

        self.display.print_header(out, "List security rules")?;
        let rules_before = self.network.list_security_rules(group_name, NSG_NAME).await?;
        self.print_rules(out, &rules_before)?;

        let mut created_rules = Vec::new();
        for (index, (rule_name, parameters)) in sample::security_rules().into_iter().enumerate() {
            self.display
                .print_header(out, &format!("Add security group rule{}", index + 1))?;
            let rule = self
                .network
                .create_or_update_security_rule(group_name, NSG_NAME, rule_name, &parameters)
                .await?;
            self.print_rules(out, std::slice::from_ref(&rule))?;
            created_rules.push(rule);
        }

        self.display.print_header(out, "List security rules")?;
        let rules_after = self.network.list_security_rules(group_name, NSG_NAME).await?;
        self.print_rules(out, &rules_after)?;

        self.display.print_header(out, "Show Network Security Group")?;
        let final_network_security_group = self
            .network
            .get_network_security_group(group_name, NSG_NAME)
            .await?;
        self.display
            .print_resource(out, &final_network_security_group)?;

        info!(
            resource_group = group_name,
            rules = rules_after.len(),
            "provisioning complete"
        );

        Ok(ProvisioningReport {
            resource_group,
            network_security_group,
            virtual_network,
            rules_before,
            created_rules,
            rules_after,
            final_network_security_group,
        })
    }

    fn print_rules(&self, out: &mut dyn Write, rules: &[SecurityRule]) -> Result<()> {
        let rows: Vec<SecurityRuleRow> = rules.iter().map(SecurityRule::to_row).collect();
        writeln!(out, "{}", format_table(&rows, self.no_color))?;
        Ok(())
    }
}
