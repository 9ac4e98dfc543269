//! CLI module
//!
//! The sample needs no arguments; the flags here only adjust output.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nsg-sample")]
#[command(about = "Create an Azure resource group, network security group, virtual network and security rules")]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,
}
