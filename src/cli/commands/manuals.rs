//! Manual commands - browse manuals, their TOC and section text
//!
//! These commands are exposed as top-level CLI commands matching MCP tool names:
//! - `list-manuals` (MCP: list_manuals)
//! - `get-toc` (MCP: get_toc)
//! - `list-sections` (MCP: list_sections)
//! - `get-section` (MCP: get_section)
//! - `get-outline` (MCP: get_outline)
//! - `resolve-reference` (MCP: resolve_reference)

use crate::cli::output::{colors, indent, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{
    ListManualsResponse, ListSectionsResponse, ResolveResponse, TocChild, TocEntry,
};
use clap::Args;
use std::sync::Arc;

/// Arguments for list-manuals
#[derive(Args, Debug)]
pub struct ListManualsArgs {}

/// Arguments for get-toc
#[derive(Args, Debug)]
pub struct GetTocArgs {
    /// Manual name
    pub manual: String,

    /// Include nested outline children
    #[arg(long)]
    pub hierarchical: bool,
}

/// Arguments for list-sections
#[derive(Args, Debug)]
pub struct ListSectionsArgs {
    /// Manual name
    pub manual: String,
}

/// Arguments for get-section
#[derive(Args, Debug)]
pub struct GetSectionArgs {
    /// Manual name
    pub manual: String,

    /// Section id from the TOC
    pub section_id: String,
}

/// Arguments for get-outline
#[derive(Args, Debug)]
pub struct GetOutlineArgs {
    /// Manual name
    pub manual: String,

    /// Section id from the TOC
    pub section_id: String,
}

/// Arguments for resolve-reference
#[derive(Args, Debug)]
pub struct ResolveReferenceArgs {
    /// Manual name
    pub manual: String,

    /// Text containing a chapter reference, e.g. "第3章を参照"
    pub ref_text: String,
}

/// Execute list-manuals command
pub async fn execute_list(
    _args: ListManualsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ListManualsResponse {
        manuals: services.repository.list_manuals()?,
    };

    match format {
        OutputFormat::Human => {
            if response.manuals.is_empty() {
                println!(
                    "No manuals found under {}",
                    colors::file_path(&services.repository.root().display().to_string())
                );
            } else {
                println!(
                    "{} manual(s):",
                    colors::number(&response.manuals.len().to_string())
                );
                for manual in &response.manuals {
                    println!("  {}", colors::manual(manual));
                }
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// Execute get-toc command
pub async fn execute_toc(
    args: GetTocArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let hierarchical = args.hierarchical || services.config.manuals.hierarchical_default;
    let toc = services.repository.get_toc(&args.manual, hierarchical)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} ({} sections)",
                colors::manual(&toc.manual),
                colors::number(&toc.toc.len().to_string())
            );
            for entry in &toc.toc {
                print_entry(entry);
            }
        }
        OutputFormat::Json => print_json(&toc)?,
    }

    Ok(())
}

fn print_entry(entry: &TocEntry) {
    println!(
        "  {:<10} {} {}",
        colors::section_id(&entry.id),
        entry.title,
        colors::dim(&format!("({})", entry.file))
    );
    if let Some(children) = &entry.children {
        print_children(children, 6);
    }
}

fn print_children(children: &[TocChild], width: usize) {
    for child in children {
        println!("{}", indent(&format!("{} {}", child.anchor, child.label), width));
        for item in child.items.iter().flatten() {
            let loc = item
                .loc
                .as_deref()
                .map(|l| format!(" [{l}]"))
                .unwrap_or_default();
            println!(
                "{}",
                indent(&format!("{}. {}{}", item.n, item.label, colors::dim(&loc)), width + 2)
            );
        }
    }
}

/// Execute list-sections command
pub async fn execute_sections(
    args: ListSectionsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let sections = services.repository.list_sections(&args.manual)?;
    let response = ListSectionsResponse {
        manual: args.manual,
        sections,
    };

    match format {
        OutputFormat::Human => {
            for id in &response.sections {
                println!("{}", colors::section_id(id));
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// Execute get-section command
pub async fn execute_section(
    args: GetSectionArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let section = services
        .repository
        .get_section(&args.manual, &args.section_id)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::section_id(&section.id),
                colors::label(&section.title)
            );
            println!("{}\n", colors::dim(&section.file));
            println!("{}", section.text.trim_end());
        }
        OutputFormat::Json => print_json(&section)?,
    }

    Ok(())
}

/// Execute get-outline command
pub async fn execute_outline(
    args: GetOutlineArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = services
        .repository
        .get_outline(&args.manual, &args.section_id)?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::section_id(&outline.id));
            if outline.children.is_empty() {
                println!("  {}", colors::dim("(no outline)"));
            } else {
                print_children(&outline.children, 2);
            }
        }
        OutputFormat::Json => print_json(&outline)?,
    }

    Ok(())
}

/// Execute resolve-reference command
pub async fn execute_resolve(
    args: ResolveReferenceArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ResolveResponse {
        target_section: services
            .repository
            .resolve_reference(&args.manual, &args.ref_text)?,
    };

    match format {
        OutputFormat::Human => match &response.target_section {
            Some(id) => println!("{}", colors::section_id(id)),
            None => println!("{}", colors::dim("No matching section")),
        },
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
