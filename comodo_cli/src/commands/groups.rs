use anyhow::Result;
use clap::{Args, Subcommand};
use comodo_api::{Client, Operation, OperationRequest, Resource};

use crate::output;

#[derive(Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    command: GroupsCommand,
}

#[derive(Subcommand)]
enum GroupsCommand {
    /// List device groups
    List {
        /// Fetch up to the API maximum instead of `--limit`
        #[arg(long)]
        all: bool,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
    /// Get a device group by ID
    Get { id: String },
    /// Create a device group
    Create {
        name: String,
        #[arg(long, default_value_t = 1)]
        company_id: i64,
    },
    /// Rename a device group
    Rename { id: String, name: String },
    /// Delete a device group
    Delete { id: String },
}

pub async fn run(args: &GroupsArgs, client: &Client, compact: bool) -> Result<()> {
    let req = match &args.command {
        GroupsCommand::List { all, limit } => {
            OperationRequest::new(Resource::DeviceGroup, Operation::List)
                .with_param("returnAll", *all)
                .with_param("limit", *limit)
        }
        GroupsCommand::Get { id } => OperationRequest::new(Resource::DeviceGroup, Operation::Get)
            .with_param("groupId", id.clone()),
        GroupsCommand::Create { name, company_id } => {
            OperationRequest::new(Resource::DeviceGroup, Operation::Create)
                .with_param("name", name.clone())
                .with_param("companyId", *company_id)
        }
        GroupsCommand::Rename { id, name } => {
            OperationRequest::new(Resource::DeviceGroup, Operation::Rename)
                .with_param("groupId", id.clone())
                .with_param("name", name.clone())
        }
        GroupsCommand::Delete { id } => {
            OperationRequest::new(Resource::DeviceGroup, Operation::Delete)
                .with_param("groupId", id.clone())
        }
    };

    let result = client.execute(&req).await?;
    output::print(&result, compact)
}
