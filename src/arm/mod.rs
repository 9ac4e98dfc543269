//! Azure Resource Manager transport
//!
//! A shared REST client plus the wire shapes common to every ARM API.

pub mod client;
pub mod models;

pub use client::*;
pub use models::*;
