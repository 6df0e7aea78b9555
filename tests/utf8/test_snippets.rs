//! Snippet windows over multi-byte text

use manual_tools::core::search::snippet::{make_snippet, ELLIPSIS};

fn body(snippet: &str) -> &str {
    snippet
        .trim_start_matches(ELLIPSIS)
        .trim_end_matches(ELLIPSIS)
}

#[test]
fn test_window_counts_characters_not_bytes() {
    let text = format!("{}支払{}", "漢".repeat(10), "字".repeat(10));
    let start = text.find("支払").unwrap();
    let snippet = make_snippet(&text, start, start + "支払".len(), 3);

    assert_eq!(snippet, "…漢漢漢支払字字字…");
    assert_eq!(body(&snippet).chars().count(), 3 + 2 + 3);
}

#[test]
fn test_emoji_neighbours_are_kept_whole() {
    let text = "🎉🎉🎉注意🚑🚑🚑";
    let start = text.find("注意").unwrap();
    let snippet = make_snippet(text, start, start + "注意".len(), 2);

    assert_eq!(snippet, "…🎉🎉注意🚑🚑…");
}

#[test]
fn test_mixed_width_window() {
    let text = "aあ🎉b注意cい😀d";
    let start = text.find("注意").unwrap();
    let snippet = make_snippet(text, start, start + "注意".len(), 4);

    assert_eq!(snippet, "aあ🎉b注意cい😀d");
}

#[test]
fn test_zero_width_window() {
    let text = "前置き注意後書き";
    let start = text.find("注意").unwrap();
    let snippet = make_snippet(text, start, start + "注意".len(), 0);

    assert_eq!(snippet, "…注意…");
}

#[test]
fn test_ideographic_space_trimmed() {
    let text = "\u{3000}注意\u{3000}";
    let start = text.find("注意").unwrap();
    assert_eq!(make_snippet(text, start, start + "注意".len(), 80), "注意");
}
