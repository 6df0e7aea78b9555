//! Validate and manual-info commands - TOC health and cache state
//!
//! - `validate` loads every manual and reports validation issues
//! - `manual-info` shows the cache snapshot of one manual

use crate::cli::output::{colors, format_issue, format_relative_time, print_json};
use crate::cli::OutputFormat;
use crate::core::repository::ValidationReport;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate only this manual
    pub manual: Option<String>,

    /// Exit with an error when any issue is reported
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the manual-info command
#[derive(Args, Debug)]
pub struct ManualInfoArgs {
    /// Manual name
    pub manual: String,
}

/// Execute the validate command
pub async fn execute_validate(
    args: ValidateArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reports = match &args.manual {
        Some(manual) => {
            let cache = services.repository.ensure_loaded(manual)?;
            vec![ValidationReport {
                manual: cache.manual.clone(),
                entries: cache.toc.toc.len(),
                issues: cache.issues.clone(),
            }]
        }
        None => services.repository.validate_all()?,
    };

    let issue_count: usize = reports.iter().map(|r| r.issues.len()).sum();

    match format {
        OutputFormat::Human => {
            for report in &reports {
                let status = if report.is_clean() {
                    colors::success("ok")
                } else {
                    colors::warning(&format!("{} issue(s)", report.issues.len()))
                };
                println!(
                    "{} ({} entries): {}",
                    colors::manual(&report.manual),
                    colors::number(&report.entries.to_string()),
                    status
                );
                for issue in &report.issues {
                    println!("    {}", format_issue(issue));
                }
            }
            if reports.is_empty() {
                println!("{}", colors::dim("No manuals to validate"));
            }
        }
        OutputFormat::Json => print_json(&reports)?,
    }

    if args.deny_warnings && issue_count > 0 {
        return Err(format!("{issue_count} validation issue(s) reported").into());
    }
    Ok(())
}

/// Execute the manual-info command
pub async fn execute_info(
    args: ManualInfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = services.repository.cache_info(&args.manual)?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::manual(&info.manual));
            println!(
                "  TOC:          {}",
                colors::file_path(&services.repository.toc_path(&args.manual).display().to_string())
            );
            println!("  Entries:      {}", colors::number(&info.entries.to_string()));
            println!(
                "  Chapter keys: {}",
                colors::number(&info.chapter_keys.to_string())
            );
            println!("  Issues:       {}", colors::number(&info.issues.to_string()));
            println!("  SHA-256:      {}", colors::dim(&info.fingerprint));
            println!(
                "  Modified:     {} ({})",
                info.modified_at.to_rfc3339(),
                format_relative_time(&info.modified_at)
            );
            println!("  Loaded:       {}", info.loaded_at.to_rfc3339());
        }
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}
