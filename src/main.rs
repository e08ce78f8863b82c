use anyhow::Result;
use clap::Parser;
use jiangxi_weather::constants::PROVINCE;
use jiangxi_weather::models::LocationList;
use jiangxi_weather::tools::WeatherTools;
use jiangxi_weather::{locations, web, Cli, Commands, WeatherService};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries MCP frames and `report` output, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jiangxi_weather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let service = WeatherService::new(&cli.service_config())?;

    match cli.into_command() {
        Commands::Serve(args) => {
            tracing::info!("Starting weather endpoint");
            web::run(&args.host, args.port, service).await?;
        }
        Commands::Mcp => {
            tracing::info!("Starting MCP weather server");
            let server = WeatherTools::new(service).serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            tracing::info!("Server shutdown complete");
        }
        Commands::Report { location_id } => {
            let report = service.get_weather_report(&location_id).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Locations => {
            let list = LocationList {
                province: PROVINCE,
                locations: locations::all(),
            };
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
    }

    Ok(())
}
