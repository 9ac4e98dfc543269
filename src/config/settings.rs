//! Configuration settings management
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. Optional configuration file
//! 3. Environment variables (`AZURE_*` for credentials, `NSG_SAMPLE_*` for the rest)

use crate::error::{Result, SampleError};
use config::{Config as ConfigSource, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Subscription used when `AZURE_SUBSCRIPTION_ID` is not set
pub const PLACEHOLDER_SUBSCRIPTION_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Region every sample resource is created in
pub const WEST_US: &str = "westus";

/// Resource group holding every sample resource
pub const GROUP_NAME: &str = "azure-nsg-sample-group";

pub const DEFAULT_ARM_ENDPOINT: &str = "https://management.azure.com";

/// Service principal credentials and target subscription
#[derive(Clone)]
pub struct Credentials {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<Zeroizing<String>>,
    pub subscription_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("subscription_id", &self.subscription_id)
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<Zeroizing<String>>,
    pub subscription_id: String,
    pub location: String,
    pub resource_group: String,
    pub arm_endpoint: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("credentials", &self.credentials())
            .field("location", &self.location)
            .field("resource_group", &self.resource_group)
            .field("arm_endpoint", &self.arm_endpoint)
            .finish()
    }
}

impl Settings {
    pub fn get_config_path() -> Result<PathBuf> {
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            use std::env;
            let config_dir = if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
                PathBuf::from(xdg_config_home)
            } else {
                let home_dir = env::var("HOME")
                    .map_err(|_| SampleError::config("HOME environment variable not set"))?;
                PathBuf::from(home_dir).join(".config")
            };
            Ok(config_dir.join("nsg-sample").join("nsg-sample.toml"))
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            let config_dir = dirs::config_dir()
                .ok_or_else(|| SampleError::config("Unable to determine config directory"))?;
            Ok(config_dir.join("nsg-sample").join("nsg-sample.toml"))
        }
    }

    /// Build settings from an optional file and an environment.
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of whatever `AZURE_*` variables the host has set.
    pub fn load_from(file: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self> {
        Self::build(file, false, env)
    }

    /// Like `load_from`, but the file must exist and parse
    pub fn load_from_file(file: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        Self::build(Some(file), true, env)
    }

    fn build(
        file: Option<&Path>,
        file_required: bool,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = ConfigSource::builder()
            .set_default("subscription_id", PLACEHOLDER_SUBSCRIPTION_ID)?
            .set_default("location", WEST_US)?
            .set_default("resource_group", GROUP_NAME)?
            .set_default("arm_endpoint", DEFAULT_ARM_ENDPOINT)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(file_required));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("AZURE")
                    .ignore_empty(true)
                    .source(env.clone()),
            )
            .add_source(
                Environment::with_prefix("NSG_SAMPLE")
                    .ignore_empty(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            tenant_id: self.tenant_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            subscription_id: self.subscription_id.clone(),
        }
    }
}

/// Load settings from the default config file location and the process environment
pub fn load_settings() -> Result<Settings> {
    let config_path = Settings::get_config_path()?;
    Settings::load_from(Some(&config_path), None)
}
