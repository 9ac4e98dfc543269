//! Configuration management module
//!
//! Loads credentials and sample settings from defaults, an optional
//! configuration file and environment variables.

pub mod settings;

pub use settings::*;
