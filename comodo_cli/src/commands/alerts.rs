use anyhow::Result;
use clap::{Args, Subcommand};
use comodo_api::{Client, Operation, OperationRequest, Resource};

use crate::output;

#[derive(Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    command: AlertsCommand,
}

#[derive(Subcommand)]
enum AlertsCommand {
    /// List alerts
    List {
        /// Fetch up to the API maximum instead of `--limit`
        #[arg(long)]
        all: bool,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
    /// Get an alert by ID
    Get { id: String },
    /// Alert logs for one device
    Logs { device_id: String },
    /// Create an alert
    Create {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete alerts by ID
    Delete {
        /// Comma-separated alert IDs
        ids: String,
    },
}

pub async fn run(args: &AlertsArgs, client: &Client, compact: bool) -> Result<()> {
    let req = match &args.command {
        AlertsCommand::List { all, limit } => {
            OperationRequest::new(Resource::Alert, Operation::List)
                .with_param("returnAll", *all)
                .with_param("limit", *limit)
        }
        AlertsCommand::Get { id } => OperationRequest::new(Resource::Alert, Operation::Get)
            .with_param("alertId", id.clone()),
        AlertsCommand::Logs { device_id } => {
            OperationRequest::new(Resource::Alert, Operation::LogsByDevice)
                .with_param("deviceId", device_id.clone())
        }
        AlertsCommand::Create { name, description } => {
            OperationRequest::new(Resource::Alert, Operation::Create)
                .with_param("name", name.clone())
                .with_param("description", description.clone())
        }
        AlertsCommand::Delete { ids } => {
            OperationRequest::new(Resource::Alert, Operation::DeleteBulk)
                .with_param("alertIds", ids.clone())
        }
    };

    let result = client.execute(&req).await?;
    output::print(&result, compact)
}
