//! CLI adapter for manual-tools
//!
//! Provides a command-line interface to browse manuals, search their text
//! and check their TOC descriptors. This module is parallel to `mcp/`:
//! both depend on `core/`, and the CLI only borrows the MCP server's
//! identity report for `get-server-info`.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::services::Services;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// manual-tools - browse and search structured manuals
///
/// Reads manuals laid out as a TOC descriptor plus one text file per
/// section, and answers TOC, section, search and exception queries.
#[derive(Parser, Debug)]
#[command(name = "manual-tools")]
#[command(version)]
#[command(about = "Browse and search structured manuals", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Manuals root directory (overrides configuration and MANUALS_ROOT)
    #[arg(long, global = true, value_name = "DIR")]
    pub manuals_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List manuals under the manuals root
    #[command(name = "list-manuals")]
    ListManuals(commands::manuals::ListManualsArgs),

    /// Show the table of contents of a manual
    #[command(name = "get-toc")]
    GetToc(commands::manuals::GetTocArgs),

    /// List section ids of a manual in TOC order
    #[command(name = "list-sections")]
    ListSections(commands::manuals::ListSectionsArgs),

    /// Print the text of one section
    #[command(name = "get-section")]
    GetSection(commands::manuals::GetSectionArgs),

    /// Show the nested outline of one section
    #[command(name = "get-outline")]
    GetOutline(commands::manuals::GetOutlineArgs),

    /// Resolve a chapter reference to a section id
    #[command(name = "resolve-reference")]
    ResolveReference(commands::manuals::ResolveReferenceArgs),

    /// Search section text (regex, plain or loose)
    #[command(name = "search-text")]
    SearchText(commands::SearchArgs),

    /// Extract exception and caution passages
    #[command(name = "find-exceptions")]
    FindExceptions(commands::ExceptionsArgs),

    /// Load every manual and report TOC validation issues
    Validate(commands::ValidateArgs),

    /// Show the cache snapshot of one manual
    #[command(name = "manual-info")]
    ManualInfo(commands::ManualInfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  manual-tools completions bash > ~/.local/share/bash-completion/completions/manual-tools
    ///   zsh:   manual-tools completions zsh > ~/.zfunc/_manual-tools
    ///   fish:  manual-tools completions fish > ~/.config/fish/completions/manual-tools.fish
    Completions(commands::CompletionsArgs),
}

/// Load configuration for a CLI run, applying the `--manuals-root` override
pub fn load_config(manuals_root: Option<PathBuf>) -> crate::core::error::Result<Config> {
    let mut config = Config::load()?;
    if let Some(root) = manuals_root {
        config.manuals.root = root;
    }
    Ok(config)
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = load_config(cli.manuals_root)?;
    let services = Arc::new(Services::new(config)?);

    dispatch(cli.command, &services, cli.format).await
}

/// Execute one command against existing services
pub async fn dispatch(
    command: Commands,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::ListManuals(args) => commands::manuals::execute_list(args, services, format).await,
        Commands::GetToc(args) => commands::manuals::execute_toc(args, services, format).await,
        Commands::ListSections(args) => {
            commands::manuals::execute_sections(args, services, format).await
        }
        Commands::GetSection(args) => {
            commands::manuals::execute_section(args, services, format).await
        }
        Commands::GetOutline(args) => {
            commands::manuals::execute_outline(args, services, format).await
        }
        Commands::ResolveReference(args) => {
            commands::manuals::execute_resolve(args, services, format).await
        }
        Commands::SearchText(args) => commands::search::execute(args, services, format).await,
        Commands::FindExceptions(args) => {
            commands::exceptions::execute(args, services, format).await
        }
        Commands::Validate(args) => {
            commands::validate::execute_validate(args, services, format).await
        }
        Commands::ManualInfo(args) => commands::validate::execute_info(args, services, format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, services, format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, services, format).await,
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
