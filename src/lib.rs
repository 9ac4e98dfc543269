//! azure-nsg-sample - Azure network provisioning sample
//!
//! Creates a resource group, a network security group, a virtual network
//! whose subnet uses that group, and two inbound security rules through the
//! Azure Resource Manager REST API.

pub mod arm;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod provision;
pub mod resources;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, SampleError};
