//! Utility functions module
//!
//! HTTP client setup, retry logic and output formatting.

pub mod format;
pub mod network;
pub mod retry;

pub use format::*;
pub use network::*;
pub use retry::*;
