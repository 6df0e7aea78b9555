//! Text search integration tests
//!
//! Exercises the three query modes, limits, section restriction and
//! snippet shape against the standard fixture manual.

use crate::common::{create_test_services, test_config, TestManuals, BENEFITS_MANUAL};
use manual_tools::core::search::snippet::ELLIPSIS;
use manual_tools::core::services::Services;
use manual_tools::{ManualError, SearchMode, SearchRequest};
use serde_json::json;

fn request(query: &str) -> SearchRequest {
    SearchRequest {
        manual_name: BENEFITS_MANUAL.to_string(),
        query: query.to_string(),
        section_id: None,
        limit: None,
        mode: None,
        case_sensitive: false,
    }
}

fn section_ids(services: &Services, req: &SearchRequest) -> Vec<String> {
    services
        .search
        .search_text(req)
        .unwrap()
        .into_iter()
        .map(|hit| hit.section_id)
        .collect()
}

#[test]
fn test_one_hit_per_section_in_toc_order() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let hits = services.search.search_text(&request("給付金")).unwrap();
    let ids: Vec<_> = hits.iter().map(|h| h.section_id.as_str()).collect();
    assert_eq!(ids, vec!["01", "02-1", "02-2", "03"]);
    assert!(hits.iter().all(|h| h.snippet.contains("給付金")));
}

#[test]
fn test_limit_stops_scan() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request("給付金");
    req.limit = Some(2);
    assert_eq!(section_ids(&services, &req), vec!["01", "02-1"]);
}

#[test]
fn test_limit_bounds() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    for limit in [0, 101] {
        let mut req = request("給付金");
        req.limit = Some(limit);
        assert!(matches!(
            services.search.search_text(&req),
            Err(ManualError::InvalidRequest(_))
        ));
    }

    let mut req = request("給付金");
    req.limit = Some(100);
    assert!(services.search.search_text(&req).is_ok());
}

#[test]
fn test_empty_query_rejected() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    assert!(matches!(
        services.search.search_text(&request("")),
        Err(ManualError::InvalidRequest(_))
    ));
}

#[test]
fn test_section_restriction() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request("給付金");
    req.section_id = Some("03".to_string());
    assert_eq!(section_ids(&services, &req), vec!["03"]);

    req.section_id = Some("99".to_string());
    assert!(section_ids(&services, &req).is_empty());
}

#[test]
fn test_unknown_manual_propagates() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request("給付金");
    req.manual_name = "missing".to_string();
    assert!(matches!(
        services.search.search_text(&req),
        Err(ManualError::ManualNotFound(_))
    ));
}

#[test]
fn test_regex_mode() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let req = request("通院|手術");
    assert_eq!(section_ids(&services, &req), vec!["02-2", "03"]);
}

#[test]
fn test_invalid_regex_matches_literally() {
    let manuals = TestManuals::standard();
    manuals.add_manual(
        "literal",
        json!({"manual": "literal", "toc": [{"id": "1", "title": "t", "file": "1.txt"}]}),
        &[("1.txt", "入院給付(日額)の支払\n")],
    );
    let services = create_test_services(manuals.root());

    let mut req = request("給付(");
    req.manual_name = "literal".to_string();
    assert_eq!(section_ids(&services, &req), vec!["1"]);
}

#[test]
fn test_plain_mode_escapes() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request("通院|手術");
    req.mode = Some(SearchMode::Plain);
    assert!(section_ids(&services, &req).is_empty());
}

#[test]
fn test_loose_mode_tolerates_separators() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request("帝王切開");
    assert!(section_ids(&services, &req).is_empty());

    req.mode = Some(SearchMode::Loose);
    assert_eq!(section_ids(&services, &req), vec!["03"]);
}

#[test]
fn test_width_normalization_and_case() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    // Section text is NFKC-normalized, so full-width ＡＢＣ matches ASCII
    assert_eq!(section_ids(&services, &request("ABC")), vec!["03"]);
    assert_eq!(section_ids(&services, &request("abc")), vec!["03"]);

    let mut req = request("abc");
    req.case_sensitive = true;
    assert!(section_ids(&services, &req).is_empty());
}

#[test]
fn test_configured_default_mode() {
    let manuals = TestManuals::standard();
    let mut config = test_config(manuals.root());
    config.search.default_mode = SearchMode::Loose;
    let services = Services::new(config).unwrap();

    assert_eq!(section_ids(&services, &request("帝王切開")), vec!["03"]);
}

#[test]
fn test_snippet_window() {
    let manuals = TestManuals::empty();
    let body = format!("{}目印{}", "前".repeat(200), "後".repeat(200));
    manuals.add_manual(
        "long",
        json!({"manual": "long", "toc": [{"id": "1", "title": "t", "file": "1.txt"}]}),
        &[("1.txt", &body)],
    );
    let services = create_test_services(manuals.root());

    let mut req = request("目印");
    req.manual_name = "long".to_string();
    let hit = services.search.search_text(&req).unwrap().remove(0);

    assert!(hit.snippet.starts_with(ELLIPSIS));
    assert!(hit.snippet.ends_with(ELLIPSIS));
    let width = services.config.search.snippet_width;
    let expected = format!(
        "{ELLIPSIS}{}目印{}{ELLIPSIS}",
        "前".repeat(width),
        "後".repeat(width)
    );
    assert_eq!(hit.snippet, expected);
}
