//! Exception extraction integration tests

use crate::common::{create_test_services, test_config, TestManuals, BENEFITS_MANUAL};
use manual_tools::core::services::Services;
use manual_tools::{ExceptionsRequest, ManualError};
use serde_json::json;

fn request() -> ExceptionsRequest {
    ExceptionsRequest {
        manual_name: BENEFITS_MANUAL.to_string(),
        section_id: None,
        limit: None,
    }
}

#[test]
fn test_hits_with_context() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let hits = services.exceptions.find_exceptions(&request()).unwrap();
    let pairs: Vec<(&str, &str)> = hits
        .iter()
        .map(|h| (h.section_id.as_str(), h.text.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (
                "02-1",
                "入院日数に応じて支払う。 日帰り入院は対象外とする。 詳細は第3章を参照。"
            ),
            // surrounding blank lines are dropped
            ("02-2", "注意"),
            (
                "03",
                "帝王・切開は支払対象とする。 美容整形は支払われない。 ABC検査を含む。"
            ),
        ]
    );
}

#[test]
fn test_limit_is_global() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request();
    req.limit = Some(2);
    let hits = services.exceptions.find_exceptions(&req).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].section_id, "02-2");
}

#[test]
fn test_limit_bounds() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    for limit in [0, 201] {
        let mut req = request();
        req.limit = Some(limit);
        assert!(matches!(
            services.exceptions.find_exceptions(&req),
            Err(ManualError::InvalidRequest(_))
        ));
    }
}

#[test]
fn test_many_hits_in_one_section_capped() {
    let manuals = TestManuals::empty();
    let body: String = (0..300).map(|i| format!("{i}: 例外あり\n")).collect();
    manuals.add_manual(
        "dense",
        json!({"manual": "dense", "toc": [{"id": "1", "title": "t", "file": "1.txt"}]}),
        &[("1.txt", &body)],
    );
    let services = create_test_services(manuals.root());

    let mut req = request();
    req.manual_name = "dense".to_string();
    assert_eq!(services.exceptions.find_exceptions(&req).unwrap().len(), 50);

    req.limit = Some(200);
    assert_eq!(services.exceptions.find_exceptions(&req).unwrap().len(), 200);
}

#[test]
fn test_section_restriction() {
    let manuals = TestManuals::standard();
    let services = create_test_services(manuals.root());

    let mut req = request();
    req.section_id = Some("03".to_string());
    let hits = services.exceptions.find_exceptions(&req).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].section_id, "03");

    req.section_id = Some("01".to_string());
    assert!(services.exceptions.find_exceptions(&req).unwrap().is_empty());
}

#[test]
fn test_custom_vocabulary() {
    let manuals = TestManuals::standard();
    let mut config = test_config(manuals.root());
    config.exceptions.terms = vec!["別表".to_string()];
    let services = Services::new(config).unwrap();

    let hits = services.exceptions.find_exceptions(&request()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].section_id, "01");
    assert_eq!(hits[0].text, "用語の定義は別表による。");
}

#[test]
fn test_empty_vocabulary_rejected() {
    let manuals = TestManuals::standard();
    let mut config = test_config(manuals.root());
    config.exceptions.terms = vec![" ".to_string()];
    assert!(matches!(
        Services::new(config),
        Err(ManualError::ConfigError(_))
    ));
}
