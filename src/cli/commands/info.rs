//! Info command - show version and server information

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::mcp::tools::get_server_info::ServerInfoReport;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-server-info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the get-server-info command
pub async fn execute(
    _args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = ServerInfoReport::collect(services)?;

    match format {
        OutputFormat::Human => {
            println!("{} {}", colors::label(&info.name), info.version);
            println!("Protocol: MCP {}", info.protocol_version);
            println!("Tools: {}", info.tools.join(", "));
            println!(
                "Manuals: {} under {}",
                colors::number(&info.manual_count.to_string()),
                colors::file_path(&info.manuals_root.display().to_string())
            );
        }
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}
