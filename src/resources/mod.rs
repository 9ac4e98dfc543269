//! Resource management module
//!
//! Resource group operations against `Microsoft.Resources`.

pub mod models;
pub mod operations;

pub use models::*;
pub use operations::*;
