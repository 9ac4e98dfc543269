//! Provisioning workflow module
//!
//! Drives the fixed resource group, NSG, virtual network and security rule
//! sequence through the resource and network clients.

pub mod sample;
pub mod workflow;

pub use workflow::*;
