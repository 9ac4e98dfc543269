//! Network management module
//!
//! Network security groups, virtual networks and security rules against
//! `Microsoft.Network`.

pub mod models;
pub mod operations;

pub use models::*;
pub use operations::*;
