//! Tests for the clap command tree
//!
//! Command names mirror MCP tool names with hyphens.

use clap::Parser;
use manual_tools::cli::{Cli, Commands, OutputFormat};
use manual_tools::SearchMode;
use std::path::PathBuf;

/// Test global flags and defaults
#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from(["manual-tools", "list-manuals"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Human);
    assert!(cli.manuals_root.is_none());

    let cli = Cli::try_parse_from([
        "manual-tools",
        "list-manuals",
        "--format",
        "json",
        "--manuals-root",
        "/srv/manuals",
    ])
    .unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.manuals_root, Some(PathBuf::from("/srv/manuals")));
}

/// Test search-text arguments
#[test]
fn test_search_text_args() {
    let cli = Cli::try_parse_from([
        "manual-tools",
        "search-text",
        "給付金編",
        "入院|手術",
        "-s",
        "02-1",
        "-k",
        "5",
        "-m",
        "loose",
        "--case-sensitive",
    ])
    .unwrap();

    match cli.command {
        Commands::SearchText(args) => {
            assert_eq!(args.manual, "給付金編");
            assert_eq!(args.query, "入院|手術");
            assert_eq!(args.section.as_deref(), Some("02-1"));
            assert_eq!(args.limit, Some(5));
            assert_eq!(args.mode, Some(SearchMode::Loose));
            assert!(args.case_sensitive);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

/// Test search-text rejects unknown modes
#[test]
fn test_search_text_unknown_mode() {
    let result = Cli::try_parse_from(["manual-tools", "search-text", "m", "q", "--mode", "fuzzy"]);
    assert!(result.is_err());
}

/// Test positional arguments of the browse commands
#[test]
fn test_browse_commands() {
    let cli = Cli::try_parse_from(["manual-tools", "get-section", "給付金編", "02-1"]).unwrap();
    match cli.command {
        Commands::GetSection(args) => {
            assert_eq!(args.manual, "給付金編");
            assert_eq!(args.section_id, "02-1");
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli =
        Cli::try_parse_from(["manual-tools", "get-toc", "給付金編", "--hierarchical"]).unwrap();
    assert!(matches!(cli.command, Commands::GetToc(args) if args.hierarchical));

    let cli = Cli::try_parse_from(["manual-tools", "resolve-reference", "給付金編", "第3章を参照"])
        .unwrap();
    assert!(matches!(cli.command, Commands::ResolveReference(args) if args.ref_text == "第3章を参照"));

    assert!(Cli::try_parse_from(["manual-tools", "get-section", "給付金編"]).is_err());
}

/// Test validate with and without a manual
#[test]
fn test_validate_args() {
    let cli = Cli::try_parse_from(["manual-tools", "validate"]).unwrap();
    assert!(matches!(cli.command, Commands::Validate(args) if args.manual.is_none()));

    let cli =
        Cli::try_parse_from(["manual-tools", "validate", "給付金編", "--deny-warnings"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Validate(args) if args.deny_warnings && args.manual.as_deref() == Some("給付金編")
    ));
}

/// Test that every tool-backed command exists
#[test]
fn test_command_names() {
    for args in [
        vec!["manual-tools", "list-manuals"],
        vec!["manual-tools", "list-sections", "m"],
        vec!["manual-tools", "get-outline", "m", "01"],
        vec!["manual-tools", "find-exceptions", "m", "-k", "3"],
        vec!["manual-tools", "manual-info", "m"],
        vec!["manual-tools", "show-config", "--all"],
        vec!["manual-tools", "get-server-info"],
        vec!["manual-tools", "completions", "bash"],
    ] {
        let result = Cli::try_parse_from(args.clone());
        assert!(result.is_ok(), "{args:?}: {:?}", result.err());
    }
}
