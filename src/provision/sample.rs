//! Fixed names and request bodies of the sample deployment
//!
//! Reusing the same names on every run makes repeated runs update the same
//! remote objects instead of creating new ones.

use crate::network::{
    Direction, NetworkSecurityGroup, Protocol, SecurityRule, SecurityRuleAccess,
    SecurityRuleProperties, Subnet, VirtualNetwork,
};

pub const NSG_NAME: &str = "sample-rust-nsg";
pub const VNET_NAME: &str = "sample-rust-vnet";
pub const SUBNET_NAME: &str = "rustSampleSubnet";
pub const VNET_ADDRESS_PREFIX: &str = "10.0.0.0/16";
pub const SUBNET_ADDRESS_PREFIX: &str = "10.0.0.0/24";
pub const DNS_SERVER: &str = "8.8.8.8";
pub const RULE_DESCRIPTION: &str = "Rust sample rule";

/// Virtual network with one subnet bound to `nsg`.
///
/// `nsg` must be the group returned by the service so that its id is set.
pub fn virtual_network_parameters(location: &str, nsg: &NetworkSecurityGroup) -> VirtualNetwork {
    VirtualNetwork::new(location)
        .with_address_prefixes([VNET_ADDRESS_PREFIX])
        .with_dns_servers([DNS_SERVER])
        .with_subnet(
            Subnet::new(SUBNET_NAME, SUBNET_ADDRESS_PREFIX).with_network_security_group(nsg),
        )
}

/// The two inbound rules, in creation order, keyed by rule name
pub fn security_rules() -> Vec<(&'static str, SecurityRule)> {
    let tcp = SecurityRuleProperties::new(
        Protocol::Tcp,
        SecurityRuleAccess::Allow,
        Direction::Inbound,
        1000,
    )
    .with_description(RULE_DESCRIPTION)
    .with_port_ranges("8888", "8000")
    .with_address_prefixes("*", "*");

    let udp = SecurityRuleProperties::new(
        Protocol::Udp,
        SecurityRuleAccess::Allow,
        Direction::Inbound,
        1001,
    )
    .with_description(RULE_DESCRIPTION)
    .with_port_ranges("9000", "9000")
    .with_address_prefixes("*", "*");

    vec![
        ("sample-rust-rule1", SecurityRule::new(tcp)),
        ("sample-rust-rule2", SecurityRule::new(udp)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_priorities_are_unique() {
        let priorities: Vec<u32> = security_rules().iter().map(|(_, r)| r.priority()).collect();
        assert_eq!(priorities, vec![1000, 1001]);
        let unique: HashSet<_> = priorities.iter().collect();
        assert_eq!(unique.len(), priorities.len());
    }

    #[test]
    fn test_rules_are_inbound_allow_tcp_then_udp() {
        let rules = security_rules();
        assert_eq!(rules[0].1.properties.protocol, Protocol::Tcp);
        assert_eq!(rules[1].1.properties.protocol, Protocol::Udp);
        for (_, rule) in &rules {
            assert_eq!(rule.properties.direction, Direction::Inbound);
            assert_eq!(rule.properties.access, SecurityRuleAccess::Allow);
        }
    }

    #[test]
    fn test_virtual_network_parameters() {
        let nsg = NetworkSecurityGroup {
            id: "/nsg/id".to_string(),
            ..NetworkSecurityGroup::new("westus")
        };
        let vnet = virtual_network_parameters("westus", &nsg);

        assert_eq!(vnet.subnets().len(), 1);
        assert_eq!(vnet.subnets()[0].name, SUBNET_NAME);
        assert_eq!(vnet.subnets()[0].network_security_group_id(), Some("/nsg/id"));
        assert_eq!(
            vnet.properties.address_space.as_ref().unwrap().address_prefixes,
            vec![VNET_ADDRESS_PREFIX.to_string()]
        );
    }
}
