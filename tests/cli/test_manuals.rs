//! Tests for the manual browsing commands
//!
//! list-manuals, get-toc, list-sections, get-section, get-outline and
//! resolve-reference, in both output formats.

use crate::cli::test_helpers::{create_cli_test_services, create_empty_cli_test_services};
use crate::common::BENEFITS_MANUAL;
use manual_tools::cli::commands::manuals::{
    execute_list, execute_outline, execute_resolve, execute_section, execute_sections,
    execute_toc, GetOutlineArgs, GetSectionArgs, GetTocArgs, ListManualsArgs, ListSectionsArgs,
    ResolveReferenceArgs,
};
use manual_tools::cli::OutputFormat;

/// Test list-manuals with one manual
#[tokio::test]
async fn test_list_manuals_human_and_json() {
    let (services, _manuals) = create_cli_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute_list(ListManualsArgs {}, &services, format).await;
        assert!(result.is_ok(), "list-manuals should succeed: {:?}", result.err());
    }
}

/// Test list-manuals on an empty root
#[tokio::test]
async fn test_list_manuals_empty_root() {
    let (services, _manuals) = create_empty_cli_test_services();

    let result = execute_list(ListManualsArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test get-toc flat and hierarchical
#[tokio::test]
async fn test_get_toc() {
    let (services, _manuals) = create_cli_test_services();

    for hierarchical in [false, true] {
        let args = GetTocArgs {
            manual: BENEFITS_MANUAL.to_string(),
            hierarchical,
        };
        let result = execute_toc(args, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "get-toc should succeed: {:?}", result.err());
    }
}

/// Test get-toc on an unknown manual
#[tokio::test]
async fn test_get_toc_unknown_manual() {
    let (services, _manuals) = create_cli_test_services();

    let args = GetTocArgs {
        manual: "存在しない".to_string(),
        hierarchical: false,
    };
    let result = execute_toc(args, &services, OutputFormat::Json).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("存在しない"), "{err}");
}

/// Test list-sections
#[tokio::test]
async fn test_list_sections() {
    let (services, _manuals) = create_cli_test_services();

    let args = ListSectionsArgs {
        manual: BENEFITS_MANUAL.to_string(),
    };
    let result = execute_sections(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test get-section output and missing sections
#[tokio::test]
async fn test_get_section() {
    let (services, _manuals) = create_cli_test_services();

    let args = GetSectionArgs {
        manual: BENEFITS_MANUAL.to_string(),
        section_id: "01".to_string(),
    };
    assert!(execute_section(args, &services, OutputFormat::Human).await.is_ok());

    let args = GetSectionArgs {
        manual: BENEFITS_MANUAL.to_string(),
        section_id: "99".to_string(),
    };
    assert!(execute_section(args, &services, OutputFormat::Human).await.is_err());
}

/// Test get-outline with and without outline children
#[tokio::test]
async fn test_get_outline() {
    let (services, _manuals) = create_cli_test_services();

    for section_id in ["02-1", "02-2"] {
        let args = GetOutlineArgs {
            manual: BENEFITS_MANUAL.to_string(),
            section_id: section_id.to_string(),
        };
        let result = execute_outline(args, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "get-outline {section_id}: {:?}", result.err());
    }
}

/// Test resolve-reference with and without a match
#[tokio::test]
async fn test_resolve_reference() {
    let (services, _manuals) = create_cli_test_services();

    for ref_text in ["第2章を参照", "付録A"] {
        let args = ResolveReferenceArgs {
            manual: BENEFITS_MANUAL.to_string(),
            ref_text: ref_text.to_string(),
        };
        let result = execute_resolve(args, &services, OutputFormat::Json).await;
        assert!(result.is_ok(), "resolve {ref_text}: {:?}", result.err());
    }
}
