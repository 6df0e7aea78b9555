//! manual-tools MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the manual repository, text
//! search and exception extraction as tools for MCP clients.

use manual_tools::core::config::{Config, LoggingConfig};
use manual_tools::core::services::Services;
use manual_tools::core::xdg::XdgDirs;
use manual_tools::mcp::McpServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(filter)
        .with_ansi(false); // No color codes

    if logging.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

/// Load and validate every manual once before serving
///
/// Validation issues are only logged; a manual whose TOC cannot be
/// loaded at all stops the server.
fn validate_manuals_on_startup(services: &Services) -> manual_tools::Result<()> {
    tracing::info!("Validating manuals...");

    let reports = services.repository.validate_all()?;
    let issue_count: usize = reports.iter().map(|r| r.issues.len()).sum();
    if issue_count > 0 {
        tracing::warn!(
            "{} manual(s) loaded with {} validation issue(s)",
            reports.len(),
            issue_count
        );
    } else {
        tracing::info!("All {} manual(s) loaded cleanly", reports.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let xdg = XdgDirs::new();

    // Load configuration
    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_logging(&config.logging);
    xdg.log_paths();
    config.log_config();

    // Create services
    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            tracing::error!("Failed to initialize services: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = validate_manuals_on_startup(&services) {
        tracing::error!("Startup validation failed: {}", e);
        std::process::exit(1);
    }

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
