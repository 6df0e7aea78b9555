//! Search command - search section text

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{SearchMode, SearchRequest, SearchTextResponse};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search-text command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Manual name
    pub manual: String,

    /// Search query (regular expression unless --mode says otherwise)
    pub query: String,

    /// Restrict the search to one section
    #[arg(long, short = 's')]
    pub section: Option<String>,

    /// Maximum number of hits (configured default when omitted)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// How the query is interpreted: regex, plain or loose
    #[arg(long, short = 'm')]
    pub mode: Option<SearchMode>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Execute the search-text command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest {
        manual_name: args.manual,
        query: args.query,
        section_id: args.section,
        limit: args.limit,
        mode: args.mode,
        case_sensitive: args.case_sensitive,
    };

    let response = SearchTextResponse {
        results: services.search.search_text(&request)?,
    };

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!(
                    "No results found for '{}' in '{}'",
                    colors::label(&request.query),
                    colors::manual(&request.manual_name)
                );
            } else {
                println!(
                    "Found {} section(s) in '{}':\n",
                    colors::number(&response.results.len().to_string()),
                    colors::manual(&request.manual_name)
                );
                for hit in &response.results {
                    println!("[{}]", colors::section_id(&hit.section_id));
                    println!("    {}\n", hit.snippet.replace('\n', " "));
                }
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
