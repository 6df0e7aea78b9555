//! manual-tools CLI - command-line interface to the manual repository
//!
//! Use this for scripting, TOC checks in CI, or reading manuals without
//! an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # List manuals
//! manual-tools list-manuals
//!
//! # Read one section
//! manual-tools get-section 給付金編 02-1
//!
//! # Loose search
//! manual-tools search-text 給付金編 帝王切開 --mode loose
//!
//! # Check every TOC descriptor
//! manual-tools validate --deny-warnings
//! ```

use clap::Parser;
use manual_tools::cli::output::print_error;
use manual_tools::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
