mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comodo_api::{Client, Credentials, Operation, OperationRequest, Region, Resource};

#[derive(Parser)]
#[command(name = "comodoctl")]
#[command(about = "Manage Comodo Endpoint Manager devices, groups, and alerts")]
struct Cli {
    /// Print compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and act on enrolled devices
    Devices(commands::devices::DevicesArgs),
    /// Manage device groups
    Groups(commands::groups::GroupsArgs),
    /// Search and manage alerts
    Alerts(commands::alerts::AlertsArgs),
    /// Device summary statistics
    Stats,
    /// Verify the configured token and region
    Auth,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("comodoctl=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let token = std::env::var("COMODO_API_TOKEN").context("COMODO_API_TOKEN is not set")?;
    let region: Region = std::env::var("COMODO_REGION")
        .unwrap_or_else(|_| "us".to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("COMODO_REGION must be `us` or `eu`"))?;
    let client = Client::new(&Credentials::new(token, region))?;

    match &cli.command {
        Commands::Devices(args) => commands::devices::run(args, &client, cli.compact).await?,
        Commands::Groups(args) => commands::groups::run(args, &client, cli.compact).await?,
        Commands::Alerts(args) => commands::alerts::run(args, &client, cli.compact).await?,
        Commands::Stats => {
            let req = OperationRequest::new(Resource::Statistics, Operation::DeviceSummary);
            let result = client.execute(&req).await?;
            output::print(&result, cli.compact)?;
        }
        Commands::Auth => {
            client
                .test_credentials()
                .await
                .context("credential check failed")?;
            println!("token accepted");
        }
    }

    Ok(())
}
