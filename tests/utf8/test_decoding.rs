//! Section decoding of invalid UTF-8 bytes

use crate::common::{create_test_services, TestManuals, BENEFITS_MANUAL};
use manual_tools::core::repository::SECTION_ENCODING;
use std::fs;

#[test]
fn test_invalid_bytes_replaced() {
    let manuals = TestManuals::standard();
    let path = manuals.manual_dir(BENEFITS_MANUAL).join("02-2_通院.txt");
    let mut bytes = "通院".as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice("給付金".as_bytes());
    fs::write(path, bytes).unwrap();

    let services = create_test_services(manuals.root());
    let section = services
        .repository
        .get_section(BENEFITS_MANUAL, "02-2")
        .unwrap();

    assert_eq!(section.text, "通院\u{fffd}\u{fffd}給付金");
    assert_eq!(section.encoding, SECTION_ENCODING);
}

#[test]
fn test_truncated_multibyte_sequence() {
    let manuals = TestManuals::standard();
    let path = manuals.manual_dir(BENEFITS_MANUAL).join("03_手術.txt");
    let full = "手術".as_bytes();
    fs::write(path, &full[..full.len() - 1]).unwrap();

    let services = create_test_services(manuals.root());
    let section = services
        .repository
        .get_section(BENEFITS_MANUAL, "03")
        .unwrap();

    assert!(section.text.starts_with('手'));
    assert!(section.text.ends_with('\u{fffd}'));
}

#[test]
fn test_search_over_lossy_text() {
    let manuals = TestManuals::standard();
    let path = manuals.manual_dir(BENEFITS_MANUAL).join("03_手術.txt");
    let mut bytes = vec![0xc3];
    bytes.extend_from_slice("美容整形は支払われない。".as_bytes());
    fs::write(path, bytes).unwrap();

    let services = create_test_services(manuals.root());
    let hits = services
        .exceptions
        .find_exceptions(&manual_tools::ExceptionsRequest {
            manual_name: BENEFITS_MANUAL.to_string(),
            section_id: Some("03".to_string()),
            limit: None,
        })
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert!(hits[0].text.contains("支払われない"));
}
