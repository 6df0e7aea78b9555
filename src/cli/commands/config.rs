//! Config command - show current configuration

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the XDG paths searched for configuration
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();
    let config_file = args.all.then(|| XdgDirs::new().config_file());
    let response = ConfigResponse {
        config_file,
        config,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            if let Some(path) = &response.config_file {
                println!("  config_file: {}", colors::file_path(&path.display().to_string()));
            }
            println!("  manuals:");
            println!(
                "    root: {}",
                colors::file_path(&config.manuals.root.display().to_string())
            );
            println!("    toc_path_pattern: {}", config.manuals.toc_path_pattern);
            println!(
                "    hierarchical_default: {}",
                config.manuals.hierarchical_default
            );
            println!("  validation:");
            println!("    mode: {}", config.validation.mode);
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    snippet_width: {}", config.search.snippet_width);
            println!("    default_mode: {}", config.search.default_mode);
            println!("    regex_size_limit: {}", config.search.regex_size_limit);
            println!("  exceptions:");
            println!("    default_limit: {}", config.exceptions.default_limit);
            println!("    max_limit: {}", config.exceptions.max_limit);
            println!("    terms: {}", config.exceptions.terms.join(", "));
            println!("  logging:");
            println!("    level: {}", config.logging.level);
            println!("    json: {}", config.logging.json);
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
