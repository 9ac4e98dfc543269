//! Network data models and types
//!
//! Request and response shapes for `Microsoft.Network` network security
//! groups, virtual networks, subnets and security rules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tabled::Tabled;

use crate::arm::{ArmResource, SubResource};

/// Display function for Option<String> in tables
fn display_option(opt: &Option<String>) -> String {
    match opt {
        Some(value) => value.clone(),
        None => "-".to_string(),
    }
}

/// Network protocol a security rule applies to
///
/// Values the service adds later decode into `Other` instead of failing the
/// whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Esp,
    Ah,
    #[serde(rename = "*")]
    Any,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Protocol::Tcp => "Tcp",
            Protocol::Udp => "Udp",
            Protocol::Icmp => "Icmp",
            Protocol::Esp => "Esp",
            Protocol::Ah => "Ah",
            Protocol::Any => "*",
            Protocol::Other(value) => value,
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityRuleAccess {
    Allow,
    Deny,
}

impl fmt::Display for SecurityRuleAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityRuleAccess::Allow => f.write_str("Allow"),
            SecurityRuleAccess::Deny => f.write_str("Deny"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => f.write_str("Inbound"),
            Direction::Outbound => f.write_str("Outbound"),
        }
    }
}

/// A single allow/deny entry of a network security group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    pub properties: SecurityRuleProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRuleProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub protocol: Protocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address_prefix: Option<String>,
    pub access: SecurityRuleAccess,
    pub priority: u32,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

impl SecurityRuleProperties {
    pub fn new(
        protocol: Protocol,
        access: SecurityRuleAccess,
        direction: Direction,
        priority: u32,
    ) -> Self {
        Self {
            description: None,
            protocol,
            source_port_range: None,
            destination_port_range: None,
            source_address_prefix: None,
            destination_address_prefix: None,
            access,
            priority,
            direction,
            provisioning_state: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_port_ranges<S: Into<String>, D: Into<String>>(mut self, source: S, destination: D) -> Self {
        self.source_port_range = Some(source.into());
        self.destination_port_range = Some(destination.into());
        self
    }

    pub fn with_address_prefixes<S: Into<String>, D: Into<String>>(
        mut self,
        source: S,
        destination: D,
    ) -> Self {
        self.source_address_prefix = Some(source.into());
        self.destination_address_prefix = Some(destination.into());
        self
    }
}

impl SecurityRule {
    /// Request body for a rule; the name is carried by the request path
    pub fn new(properties: SecurityRuleProperties) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            etag: None,
            properties,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.properties.description.as_deref()
    }

    pub fn priority(&self) -> u32 {
        self.properties.priority
    }

    pub fn to_row(&self) -> SecurityRuleRow {
        let p = &self.properties;
        SecurityRuleRow {
            name: self.name.clone(),
            description: p.description.clone(),
            protocol: p.protocol.to_string(),
            ports: format!(
                "{} -> {}",
                p.source_port_range.as_deref().unwrap_or("*"),
                p.destination_port_range.as_deref().unwrap_or("*")
            ),
            priority: p.priority,
            access: p.access.to_string(),
            direction: p.direction.to_string(),
        }
    }
}

/// Table row for security rule listings
#[derive(Debug, Clone, Tabled)]
pub struct SecurityRuleRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description", display_with = "display_option")]
    pub description: Option<String>,
    #[tabled(rename = "Protocol")]
    pub protocol: String,
    #[tabled(rename = "Ports")]
    pub ports: String,
    #[tabled(rename = "Priority")]
    pub priority: u32,
    #[tabled(rename = "Access")]
    pub access: String,
    #[tabled(rename = "Direction")]
    pub direction: String,
}

/// A network security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSecurityGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<NetworkSecurityGroupProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSecurityGroupProperties {
    #[serde(default)]
    pub security_rules: Vec<SecurityRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_security_rules: Vec<SecurityRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<SubResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

impl NetworkSecurityGroup {
    /// Request body for an empty group in `location`
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn security_rules(&self) -> &[SecurityRule] {
        self.properties
            .as_ref()
            .map(|p| p.security_rules.as_slice())
            .unwrap_or(&[])
    }

    /// Reference to this group for embedding in other resources
    pub fn as_sub_resource(&self) -> SubResource {
        SubResource::new(self.id.clone())
    }
}

impl ArmResource for NetworkSecurityGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpace {
    #[serde(default)]
    pub address_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpOptions {
    #[serde(default)]
    pub dns_servers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: SubnetProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<SubResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

impl Subnet {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, address_prefix: P) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            properties: SubnetProperties {
                address_prefix: Some(address_prefix.into()),
                ..Default::default()
            },
        }
    }

    /// Attach an already-created network security group by its id
    pub fn with_network_security_group(mut self, nsg: &NetworkSecurityGroup) -> Self {
        self.properties.network_security_group = Some(nsg.as_sub_resource());
        self
    }

    pub fn network_security_group_id(&self) -> Option<&str> {
        self.properties
            .network_security_group
            .as_ref()
            .map(|r| r.id.as_str())
    }
}

/// A virtual network with its subnets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetwork {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default)]
    pub properties: VirtualNetworkProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_space: Option<AddressSpace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_options: Option<DhcpOptions>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

impl VirtualNetwork {
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_address_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.address_space = Some(AddressSpace {
            address_prefixes: prefixes.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn with_dns_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.dhcp_options = Some(DhcpOptions {
            dns_servers: servers.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn with_subnet(mut self, subnet: Subnet) -> Self {
        self.properties.subnets.push(subnet);
        self
    }

    pub fn subnets(&self) -> &[Subnet] {
        &self.properties.subnets
    }
}

impl ArmResource for VirtualNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }
}
