//! Context windows around search matches.

/// Marker added on a side where the window was truncated
pub const ELLIPSIS: &str = "…";

/// Window of up to `width` characters on each side of `text[start..end]`
///
/// Offsets are byte offsets on char boundaries, as returned by
/// `regex::Match`. The window is trimmed, and [`ELLIPSIS`] marks each side
/// that does not reach the text boundary.
pub fn make_snippet(text: &str, start: usize, end: usize, width: usize) -> String {
    let left = if width == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(width - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let right = text[end..]
        .char_indices()
        .nth(width)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    let mut snippet = String::with_capacity(right - left + 2 * ELLIPSIS.len());
    if left > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(text[left..right].trim());
    if right < text.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}
