//! nsg-sample - Azure network provisioning sample
//!
//! Provisions a resource group, NSG, virtual network and security rules
//! using service principal credentials from the environment.

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use azure_nsg_sample::arm::ArmClient;
use azure_nsg_sample::auth::{AzureAuthProvider, ClientSecretProvider};
use azure_nsg_sample::cli::Cli;
use azure_nsg_sample::config::{load_settings, Settings};
use azure_nsg_sample::network::AzureNetworkOperations;
use azure_nsg_sample::provision::ProvisioningWorkflow;
use azure_nsg_sample::resources::AzureResourceOperations;
use azure_nsg_sample::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting nsg-sample");

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path, None)?,
        None => load_settings()?,
    };
    let credentials = settings.credentials();
    info!(subscription_id = %credentials.subscription_id, "using subscription");

    let auth_provider: Arc<dyn AzureAuthProvider> =
        Arc::new(ClientSecretProvider::from_credentials(&credentials)?);

    // Both API clients are scoped to the same subscription
    let arm_client = Arc::new(ArmClient::new(
        auth_provider,
        credentials.subscription_id.clone(),
        &settings.arm_endpoint,
    )?);
    let resources = AzureResourceOperations::new(arm_client.clone());
    let network = AzureNetworkOperations::new(arm_client);

    let workflow = ProvisioningWorkflow::new(
        &resources,
        &network,
        &settings.location,
        &settings.resource_group,
        cli.no_color,
    );

    let mut stdout = std::io::stdout().lock();
    workflow.run(&mut stdout).await?;

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "azure_nsg_sample=info,nsg_sample=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
