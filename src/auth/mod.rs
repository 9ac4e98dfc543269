//! Authentication module for Azure services
//!
//! Provides service-principal (client secret) authentication against
//! Azure Active Directory for the Resource Manager APIs.

pub mod provider;

pub use provider::*;
