//! Exceptions command - extract exception and caution passages

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{ExceptionsRequest, FindExceptionsResponse};
use clap::Args;
use std::sync::Arc;

/// Arguments for the find-exceptions command
#[derive(Args, Debug)]
pub struct ExceptionsArgs {
    /// Manual name
    pub manual: String,

    /// Restrict extraction to one section
    #[arg(long, short = 's')]
    pub section: Option<String>,

    /// Maximum number of passages across all sections
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the find-exceptions command
pub async fn execute(
    args: ExceptionsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = ExceptionsRequest {
        manual_name: args.manual,
        section_id: args.section,
        limit: args.limit,
    };

    let response = FindExceptionsResponse {
        results: services.exceptions.find_exceptions(&request)?,
    };

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!(
                    "No exception passages found in '{}'",
                    colors::manual(&request.manual_name)
                );
            }
            for hit in &response.results {
                println!("[{}] {}", colors::section_id(&hit.section_id), hit.text);
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
