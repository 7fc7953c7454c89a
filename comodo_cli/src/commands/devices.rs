use anyhow::Result;
use clap::{Args, Subcommand};
use comodo_api::{Client, Operation, OperationRequest, Resource};

use crate::output;

#[derive(Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    command: DevicesCommand,
}

#[derive(Subcommand)]
enum DevicesCommand {
    /// Search enrolled devices
    List {
        /// Fetch every page instead of the first `--limit` results
        #[arg(long)]
        all: bool,
        /// Max results when not fetching all (1-500)
        #[arg(long, default_value_t = 50)]
        limit: i64,
        /// Filter by company name (substring match)
        #[arg(long)]
        company_name: Option<String>,
        /// Comma-separated company IDs
        #[arg(long)]
        company_ids: Option<String>,
        /// Filter by device name (substring match)
        #[arg(long)]
        device_name: Option<String>,
        /// OS type codes: 1 Windows, 2 macOS, 3 Linux, 4 iOS, 5 Android
        #[arg(long)]
        os_type: Vec<i64>,
        /// Online status: 0 all, 1 online, 2 offline
        #[arg(long)]
        online_status: Option<i64>,
        /// Security client status codes (1-5)
        #[arg(long)]
        security_client_status: Vec<i64>,
        /// Comma-separated group IDs
        #[arg(long)]
        group_ids: Option<String>,
        /// Include security-client details
        #[arg(long)]
        with_ccs: bool,
    },
    /// Get a device summary by ID
    Get { id: String },
    /// Count devices matching the filters
    Count {
        #[arg(long)]
        company_ids: Option<String>,
        #[arg(long)]
        device_name: Option<String>,
    },
    /// Send a reboot command to devices
    Reboot {
        /// Comma-separated device IDs
        ids: String,
        /// 1 immediate, 2 with warning
        #[arg(long, default_value_t = 2)]
        reboot_type: i64,
        /// Seconds before a warned reboot fires
        #[arg(long)]
        timeout: Option<i64>,
        /// Warning text shown to the user
        #[arg(long)]
        message: Option<String>,
    },
    /// Update the antivirus database on devices
    UpdateAvDb {
        /// Comma-separated device IDs
        ids: String,
    },
    /// Update the security client on devices
    UpdateCcs {
        /// Comma-separated device IDs
        ids: String,
    },
}

pub async fn run(args: &DevicesArgs, client: &Client, compact: bool) -> Result<()> {
    let req = match &args.command {
        DevicesCommand::List {
            all,
            limit,
            company_name,
            company_ids,
            device_name,
            os_type,
            online_status,
            security_client_status,
            group_ids,
            with_ccs,
        } => {
            let operation = if *with_ccs {
                Operation::ListWithCcs
            } else {
                Operation::List
            };
            let mut req = OperationRequest::new(Resource::Device, operation)
                .with_param("returnAll", *all)
                .with_param("limit", *limit);
            if let Some(name) = company_name {
                req = req.with_param("companyName", name.clone());
            }
            if let Some(ids) = company_ids {
                req = req.with_param("companyIds", ids.clone());
            }
            if let Some(name) = device_name {
                req = req.with_param("deviceName", name.clone());
            }
            if !os_type.is_empty() {
                req = req.with_param("osType", os_type.clone());
            }
            if let Some(status) = online_status {
                req = req.with_param("onlineStatus", *status);
            }
            if !security_client_status.is_empty() {
                req = req.with_param("securityClientStatus", security_client_status.clone());
            }
            if let Some(ids) = group_ids {
                req = req.with_param("groupIds", ids.clone());
            }
            req
        }
        DevicesCommand::Get { id } => OperationRequest::new(Resource::Device, Operation::Get)
            .with_param("deviceId", id.clone()),
        DevicesCommand::Count {
            company_ids,
            device_name,
        } => {
            let mut req = OperationRequest::new(Resource::Device, Operation::Count);
            if let Some(ids) = company_ids {
                req = req.with_param("companyIds", ids.clone());
            }
            if let Some(name) = device_name {
                req = req.with_param("deviceName", name.clone());
            }
            req
        }
        DevicesCommand::Reboot {
            ids,
            reboot_type,
            timeout,
            message,
        } => {
            let mut req = OperationRequest::new(Resource::Device, Operation::Reboot)
                .with_param("deviceIds", ids.clone())
                .with_param("rebootType", *reboot_type);
            if let Some(timeout) = timeout {
                req = req.with_param("rebootTimeout", *timeout);
            }
            if let Some(message) = message {
                req = req.with_param("rebootMessage", message.clone());
            }
            req
        }
        DevicesCommand::UpdateAvDb { ids } => {
            OperationRequest::new(Resource::Device, Operation::UpdateAvDb)
                .with_param("deviceIds", ids.clone())
        }
        DevicesCommand::UpdateCcs { ids } => {
            OperationRequest::new(Resource::Device, Operation::UpdateCcs)
                .with_param("deviceIds", ids.clone())
        }
    };

    let result = client.execute(&req).await?;
    output::print(&result, compact)
}
