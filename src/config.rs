//! Command-line and environment configuration.
//!
//! Every option can also be supplied through the environment variable named
//! in its `env` attribute, which is how hosting platforms usually pass them.

use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_LOCATION_ID, OPEN_METEO_API_BASE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Jiangxi weather lookup service")]
pub struct Cli {
    /// Base URL of the Open-Meteo compatible forecast API
    #[arg(long, env = "WEATHER_API_BASE", default_value = OPEN_METEO_API_BASE, global = true)]
    pub api_base: String,

    /// Transport timeout for the forecast request, in seconds
    #[arg(long, env = "WEATHER_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Listen options used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Address or hostname to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Serve the weather endpoint over HTTP
    Serve(ServeArgs),
    /// Serve the weather tools over MCP on stdio
    Mcp,
    /// Print one weather report as JSON
    Report {
        #[arg(default_value = DEFAULT_LOCATION_ID)]
        location_id: String,
    },
    /// Print the known locations as JSON
    Locations,
}

/// Settings of the outbound forecast client
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Cli {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            api_base: self.api_base.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// The command to run, `serve` when none was named
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}
